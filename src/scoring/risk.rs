use regex::Regex;
use std::sync::LazyLock;

use crate::DraftTweet;

pub const RISK_MAX: i32 = 30;

pub const MAX_OPTIMAL_HASHTAGS: u32 = 2;
pub const MAX_OPTIMAL_MENTIONS: u32 = 3;

// Low-effort formats the feed treats as recycled content.
static TEMPLATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^gm\s*(web3|crypto|fam|everyone)?\.?$",
        r"(?i)^(day|week)\s*\d+\s*of",
        r"(?i)here'?s\s*(a\s*)?thread",
        r"(?i)let'?s\s*talk\s*about",
        r"(?i)unpopular\s*opinion",
        r"(?i)hot\s*take",
        r"(?i)breaking:",
        r"(?i)🧵\s*thread\s*time",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

const POSITIVE_WORDS: &[&str] = &[
    "love", "great", "amazing", "awesome", "excited", "happy", "thank", "congrats", "beautiful",
    "incredible", "fantastic", "wonderful", "brilliant", "perfect", "best", "win", "success",
    "proud", "grateful", "blessed",
];

const NEGATIVE_WORDS: &[&str] = &[
    "hate", "terrible", "awful", "worst", "angry", "frustrated", "disappointed", "annoying",
    "stupid", "idiotic", "pathetic", "trash", "garbage", "sucks", "fail", "disaster",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Lightweight count-based tone classifier. Positive tone carries no penalty
/// and is only surfaced through suggestions.
pub fn sentiment_of(text: &str) -> Sentiment {
    let lower = text.to_lowercase();
    let positive = POSITIVE_WORDS.iter().filter(|word| lower.contains(*word)).count();
    let negative = NEGATIVE_WORDS.iter().filter(|word| lower.contains(*word)).count();

    if negative > positive && negative > 0 {
        Sentiment::Negative
    } else if positive > negative && positive > 0 {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}

pub fn is_template(text: &str) -> bool {
    TEMPLATE_PATTERNS.iter().any(|pattern| pattern.is_match(text))
}

pub fn risk_score(tweet: &DraftTweet, is_premium: bool) -> i32 {
    let mut penalty = 0;

    // Links on non-premium accounts take a near-cap hit; the feed cuts their
    // median engagement to roughly zero.
    if tweet.external_links > 0 {
        let links = tweet.external_links as i32;
        penalty += if is_premium {
            (links * 8).min(12)
        } else {
            (links * 15).min(20)
        };
    }

    if tweet.hashtags > MAX_OPTIMAL_HASHTAGS {
        penalty += ((tweet.hashtags - MAX_OPTIMAL_HASHTAGS) as i32 * 3).min(8);
    }

    if tweet.mentions > MAX_OPTIMAL_MENTIONS {
        penalty += ((tweet.mentions - MAX_OPTIMAL_MENTIONS) as i32 * 2).min(6);
    }

    // Flat penalty, first match only.
    if is_template(&tweet.text) {
        penalty += 5;
    }

    if sentiment_of(&tweet.text) == Sentiment::Negative {
        penalty += 3;
    }

    penalty.min(RISK_MAX)
}
