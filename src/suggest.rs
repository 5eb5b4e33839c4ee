use crate::scoring::content::OPTIMAL_MIN_LENGTH;
use crate::scoring::risk::MAX_OPTIMAL_HASHTAGS;
use crate::scoring::{is_template, posting_time_hint, sentiment_of, Sentiment};
use crate::{Category, DraftTweet, Impact, PostTime, ScoreBreakdown, Suggestion, SuggestionKind};

const THREAD_LENGTH_HINT: u32 = 250;

/// Ordered rule list. Every rule is evaluated independently; none suppresses
/// another, so several suggestions per category are expected. Rule order is
/// part of the observable contract.
pub fn generate_suggestions(
    tweet: &DraftTweet,
    breakdown: &ScoreBreakdown,
    is_premium: bool,
    when: PostTime,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if !tweet.has_media {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Positive,
            category: Category::Media,
            message: "Add media to dramatically boost reach".to_string(),
            impact: Impact::High,
            action: Some(
                "Native video gets 10x engagement vs text. Images/GIFs also help significantly."
                    .to_string(),
            ),
        });
    }

    if tweet.external_links > 0 {
        if is_premium {
            suggestions.push(Suggestion {
                kind: SuggestionKind::Negative,
                category: Category::Risk,
                message: "External links reduce reach (even with Premium)".to_string(),
                impact: Impact::High,
                action: Some(
                    "Move link to first reply for better distribution of main tweet".to_string(),
                ),
            });
        } else {
            suggestions.push(Suggestion {
                kind: SuggestionKind::Negative,
                category: Category::Risk,
                message: "CRITICAL: Links get ~0% reach without Premium".to_string(),
                impact: Impact::High,
                action: Some(
                    "Non-Premium link posts are essentially invisible. Remove link or move to reply."
                        .to_string(),
                ),
            });
        }
    }

    if !tweet.has_question && breakdown.engagement < 12 {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Positive,
            category: Category::Engagement,
            message: "Add a question to encourage replies".to_string(),
            impact: Impact::High,
            action: Some(
                "Replies are 13-27x more valuable than likes. Reply-to-reply is 75x!".to_string(),
            ),
        });
    }

    if tweet.length < OPTIMAL_MIN_LENGTH {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Neutral,
            category: Category::Content,
            message: format!("Short tweets hurt dwell time ({} chars)", tweet.length),
            impact: Impact::Medium,
            action: Some(
                "Aim for 120-240 chars. Users need to stay >3 seconds for quality signal."
                    .to_string(),
            ),
        });
    }

    if tweet.hashtags > MAX_OPTIMAL_HASHTAGS {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Negative,
            category: Category::Risk,
            message: format!("Too many hashtags ({}) triggers spam detection", tweet.hashtags),
            impact: Impact::Medium,
            action: Some(
                "Use 0-1 highly relevant hashtags max. The feed categorizes topics via NLP now."
                    .to_string(),
            ),
        });
    }

    if tweet.length > THREAD_LENGTH_HINT && !tweet.is_thread {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Positive,
            category: Category::Content,
            message: "Consider making this a thread".to_string(),
            impact: Impact::Medium,
            action: Some(
                "Threads increase dwell time and get you more impressions per topic.".to_string(),
            ),
        });
    }

    if breakdown.engagement >= 10 && !tweet.has_media {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Neutral,
            category: Category::Engagement,
            message: "Reply to comments within 30 min for a 75x boost".to_string(),
            impact: Impact::High,
            action: Some(
                "First 30 minutes are critical. Engage with every reply to multiply reach."
                    .to_string(),
            ),
        });
    }

    if is_template(&tweet.text) {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Negative,
            category: Category::Risk,
            message: "Detected template/overused format".to_string(),
            impact: Impact::Medium,
            action: Some(
                "Recycled content is penalized. Make it more original and personal.".to_string(),
            ),
        });
    }

    match sentiment_of(&tweet.text) {
        Sentiment::Negative => suggestions.push(Suggestion {
            kind: SuggestionKind::Negative,
            category: Category::Risk,
            message: "Negative tone detected - may reduce distribution".to_string(),
            impact: Impact::Medium,
            action: Some(
                "Positive/constructive content gets distributed further.".to_string(),
            ),
        }),
        Sentiment::Positive => suggestions.push(Suggestion {
            kind: SuggestionKind::Positive,
            category: Category::Engagement,
            message: "Positive tone detected - good for distribution".to_string(),
            impact: Impact::Low,
            action: None,
        }),
        Sentiment::Neutral => {}
    }

    if breakdown.timing < 12 {
        if let Some(hint) = posting_time_hint(when) {
            suggestions.push(Suggestion {
                kind: SuggestionKind::Neutral,
                category: Category::Timing,
                message: "Not optimal posting time".to_string(),
                impact: Impact::Low,
                action: Some(hint.to_string()),
            });
        }
    }

    suggestions
}
