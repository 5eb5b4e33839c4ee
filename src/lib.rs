pub mod analysis;
pub mod copy;
pub mod credibility;
pub mod engine;
pub mod factors;
pub mod features;
pub mod history;
pub mod insights;
pub mod reach;
pub mod scoring;
pub mod settings;
pub mod suggest;
pub mod variants;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Gif,
    Poll,
}

impl MediaType {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "image" | "photo" | "pic" => Some(MediaType::Image),
            "video" | "vid" => Some(MediaType::Video),
            "gif" => Some(MediaType::Gif),
            "poll" => Some(MediaType::Poll),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Gif => "gif",
            MediaType::Poll => "poll",
        }
    }
}

/// A draft post as observed in the composer. `length` is the trimmed
/// character count of `text`; `media_type` is set only when `has_media` is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftTweet {
    pub text: String,
    pub has_media: bool,
    pub media_type: Option<MediaType>,
    pub media_count: Option<u32>,
    pub is_thread: bool,
    pub thread_length: Option<u32>,
    pub has_question: bool,
    pub has_call_to_action: bool,
    pub has_emoji: bool,
    pub external_links: u32,
    pub hashtags: u32,
    pub mentions: u32,
    pub length: u32,
    pub is_reply: bool,
    pub quote_tweet: bool,
}

impl Default for DraftTweet {
    fn default() -> Self {
        Self {
            text: String::new(),
            has_media: false,
            media_type: None,
            media_count: None,
            is_thread: false,
            thread_length: None,
            has_question: false,
            has_call_to_action: false,
            has_emoji: false,
            external_links: 0,
            hashtags: 0,
            mentions: 0,
            length: 0,
            is_reply: false,
            quote_tweet: false,
        }
    }
}

/// Account signals supplied by the caller. Read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserContext {
    pub follower_count: u64,
    pub following_count: u64,
    pub is_premium: bool,
    pub is_verified: bool,
    pub account_age_months: u32,
    pub avg_engagement_rate: f64,
    pub recent_post_frequency: f64,
    pub tweep_cred_score: Option<f64>,
    pub topic_clusters: Option<Vec<String>>,
    // Last so TOML serialization keeps values ahead of tables.
    pub follower_timezones: Option<HashMap<String, u32>>,
}

impl Default for UserContext {
    fn default() -> Self {
        Self {
            follower_count: 1_000,
            following_count: 500,
            is_premium: false,
            is_verified: false,
            account_age_months: 12,
            avg_engagement_rate: 0.02,
            recent_post_frequency: 2.0,
            tweep_cred_score: None,
            topic_clusters: None,
            follower_timezones: None,
        }
    }
}

/// Five component sub-scores. Each scorer enforces its own cap; `risk` is a
/// penalty subtracted before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub content: i32,
    pub media: i32,
    pub timing: i32,
    pub engagement: i32,
    pub risk: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            Grade::S
        } else if score >= 80 {
            Grade::A
        } else if score >= 65 {
            Grade::B
        } else if score >= 50 {
            Grade::C
        } else if score >= 35 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Content,
    Media,
    Timing,
    Engagement,
    Risk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub fn weight(self) -> u8 {
        match self {
            Impact::High => 3,
            Impact::Medium => 2,
            Impact::Low => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub category: Category,
    pub message: String,
    pub impact: Impact,
    pub action: Option<String>,
}

/// Estimated impression range. `low <= median <= high` holds for every
/// overall score in 0..=100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReachPrediction {
    pub low: u64,
    pub median: u64,
    pub high: u64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Optimal,
    Suboptimal,
    Harmful,
}

/// Display-only explanation of one ranking factor. `weight` and
/// `optimal_range` are static metadata and never feed back into scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmFactor {
    pub name: String,
    pub description: String,
    pub weight: f64,
    pub current_value: f64,
    pub optimal_range: (f64, f64),
    pub status: FactorStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetScore {
    pub overall: u8,
    pub grade: Grade,
    pub breakdown: ScoreBreakdown,
    pub suggestions: Vec<Suggestion>,
    pub predicted_reach: ReachPrediction,
    pub algorithm_factors: Vec<AlgorithmFactor>,
}

/// Wall-clock snapshot for the timing scorer, read once per scoring call.
/// `day_of_week` counts from Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostTime {
    pub utc_hour: u8,
    pub day_of_week: u8,
}

impl PostTime {
    pub fn new(utc_hour: u8, day_of_week: u8) -> Self {
        Self {
            utc_hour: utc_hour.min(23),
            day_of_week: day_of_week.min(6),
        }
    }

    pub fn now() -> Self {
        use chrono::{Datelike, Timelike, Utc};

        let now = Utc::now();
        Self {
            utc_hour: now.hour() as u8,
            day_of_week: now.weekday().num_days_from_sunday() as u8,
        }
    }

    pub fn is_weekday(self) -> bool {
        (1..=5).contains(&self.day_of_week)
    }

    pub fn is_weekend(self) -> bool {
        !self.is_weekday()
    }

    // Peak windows mirror 9am-12pm / 7pm-10pm in the reference timezone (EST).
    pub fn is_peak(self) -> bool {
        let morning = (13..=17).contains(&self.utc_hour);
        let evening = self.utc_hour >= 23 || self.utc_hour <= 3;
        morning || evening
    }

    pub fn is_decent(self) -> bool {
        (11..=22).contains(&self.utc_hour)
    }
}

pub fn stable_hash64(value: &str) -> u64 {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

pub fn format_number(value: f64) -> String {
    let rounded = value.round().max(0.0) as i64;
    let mut chars: Vec<char> = rounded.to_string().chars().collect();
    let mut result = String::new();
    let mut count = 0usize;

    while let Some(ch) = chars.pop() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }

    result.chars().rev().collect()
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
