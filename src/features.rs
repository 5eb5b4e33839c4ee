use regex::Regex;
use std::sync::LazyLock;

use crate::{DraftTweet, MediaType};

// Links to the platform's own domains don't count as external.
const SELF_HOSTED_DOMAINS: &[&str] = &["twitter.com", "x.com", "t.co"];

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static HASHTAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").unwrap());
static MENTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").unwrap());
static QUESTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\?|what|how|why|when|where|who|which|would you|do you|have you|can you|should")
        .unwrap()
});
static CTA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)follow|retweet|rt|like|share|comment|reply|click|check out|subscribe|join|dm|thread|🧵")
        .unwrap()
});
static THREAD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)🧵|1/|1\)|thread|👇").unwrap());

fn is_emoji(ch: char) -> bool {
    matches!(ch as u32,
        0x1F600..=0x1F64F
            | 0x1F300..=0x1F5FF
            | 0x1F680..=0x1F6FF
            | 0x1F1E0..=0x1F1FF
            | 0x2600..=0x26FF
            | 0x2700..=0x27BF)
}

/// Text-derived signals of a draft. Media presence is never inferred from
/// text; the caller that observes attachments supplies it via `into_draft`.
#[derive(Debug, Clone, Default)]
pub struct DraftFeatures {
    pub text: String,
    pub length: u32,
    pub external_links: u32,
    pub hashtags: u32,
    pub mentions: u32,
    pub has_question: bool,
    pub has_call_to_action: bool,
    pub has_emoji: bool,
    pub is_thread: bool,
}

pub fn extract_features(text: &str) -> DraftFeatures {
    let clean = text.trim();

    let external_links = URL_PATTERN
        .find_iter(clean)
        .filter(|url| {
            let url = url.as_str();
            !SELF_HOSTED_DOMAINS.iter().any(|domain| url.contains(domain))
        })
        .count() as u32;

    DraftFeatures {
        text: clean.to_string(),
        length: clean.chars().count() as u32,
        external_links,
        hashtags: HASHTAG_PATTERN.find_iter(clean).count() as u32,
        mentions: MENTION_PATTERN.find_iter(clean).count() as u32,
        has_question: QUESTION_PATTERN.is_match(clean),
        has_call_to_action: CTA_PATTERN.is_match(clean),
        has_emoji: clean.chars().any(is_emoji),
        is_thread: THREAD_PATTERN.is_match(clean),
    }
}

impl DraftFeatures {
    pub fn into_draft(self, has_media: bool, media_type: Option<MediaType>) -> DraftTweet {
        DraftTweet {
            text: self.text,
            has_media,
            media_type: if has_media { media_type } else { None },
            media_count: None,
            is_thread: self.is_thread,
            thread_length: None,
            has_question: self.has_question,
            has_call_to_action: self.has_call_to_action,
            has_emoji: self.has_emoji,
            external_links: self.external_links,
            hashtags: self.hashtags,
            mentions: self.mentions,
            length: self.length,
            is_reply: false,
            quote_tweet: false,
        }
    }
}
