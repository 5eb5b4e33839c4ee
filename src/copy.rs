use crate::{Suggestion, TweetScore};

/// One-line summary band for the overall score.
pub fn score_summary(overall: u8) -> &'static str {
    if overall >= 90 {
        "Exceptional engagement potential with optimal signals"
    } else if overall >= 80 {
        "Strong engagement potential and well-optimized"
    } else if overall >= 70 {
        "Solid foundation with room for improvement"
    } else if overall >= 65 {
        "Good baseline, minor refinements recommended"
    } else if overall >= 55 {
        "Consider refining for better reach"
    } else if overall >= 50 {
        "Several optimizations could improve performance"
    } else if overall >= 40 {
        "Significant improvements needed for better visibility"
    } else if overall >= 35 {
        "Current signals may limit reach substantially"
    } else {
        "Major revisions recommended before posting"
    }
}

/// Highest-impact suggestion, rewritten for display. Stable sort by impact
/// weight preserves insertion order among ties; the rewrite never touches the
/// stored suggestion.
pub fn top_recommendation(score: &TweetScore) -> Option<String> {
    if score.suggestions.is_empty() {
        return None;
    }

    let mut sorted: Vec<&Suggestion> = score.suggestions.iter().collect();
    sorted.sort_by_key(|suggestion| std::cmp::Reverse(suggestion.impact.weight()));

    sorted.first().map(|top| rewrite_recommendation(top))
}

/// Keyword-matched rewrite table producing punchier, benefit-led copy.
pub fn rewrite_recommendation(suggestion: &Suggestion) -> String {
    let message = suggestion.message.to_lowercase();

    if message.contains("media") || message.contains("image") || message.contains("video") {
        return "Add media for 12-20% engagement boost".to_string();
    }
    if message.contains("shorten") || message.contains("too long") {
        return "Shorten to 180 characters for optimal engagement".to_string();
    }
    if message.contains("expand") || message.contains("too short") {
        return "Expand to 120+ characters for better performance".to_string();
    }
    if message.contains("link") && message.contains("external") {
        return "Remove external links to maximize reach".to_string();
    }
    if message.contains("hashtag") {
        return "Reduce hashtags to 1-2 for better distribution".to_string();
    }
    if message.contains("question") {
        return "Add a question to encourage replies".to_string();
    }
    if message.contains("thread") {
        return "Format as thread for higher engagement".to_string();
    }
    if message.contains("call") || message.contains("cta") {
        return "Add clear call-to-action for better engagement".to_string();
    }
    if message.contains("emoji") {
        return "Add 1-2 emojis for visual appeal".to_string();
    }
    if message.contains("mention") {
        return "Reduce mentions to avoid spam signals".to_string();
    }

    suggestion.message.clone()
}

pub fn score_label(score: &TweetScore) -> String {
    format!("Score {} out of 100", score.overall)
}
