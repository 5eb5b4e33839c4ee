pub mod content;
pub mod engagement;
pub mod media;
pub mod risk;
pub mod timing;

pub use content::{content_score, CONTENT_MAX};
pub use engagement::{engagement_score, ENGAGEMENT_MAX};
pub use media::{media_score, MEDIA_MAX};
pub use risk::{is_template, risk_score, sentiment_of, Sentiment, RISK_MAX};
pub use timing::{posting_time_hint, timing_score, TIMING_MAX};

use crate::{DraftTweet, PostTime, ScoreBreakdown, UserContext};

pub fn score_breakdown(
    tweet: &DraftTweet,
    user: Option<&UserContext>,
    when: PostTime,
) -> ScoreBreakdown {
    let is_premium = user.map_or(false, |u| u.is_premium);
    ScoreBreakdown {
        content: content_score(tweet),
        media: media_score(tweet),
        timing: timing_score(when, user),
        engagement: engagement_score(tweet),
        risk: risk_score(tweet, is_premium),
    }
}

// The 1.25 multiplier rescales the ~80-point positive maximum
// (25 + 20 + 15 + 20) to a 100-point scale. Risk is subtracted first.
pub fn overall_score(breakdown: &ScoreBreakdown) -> u8 {
    let raw = breakdown.content + breakdown.media + breakdown.timing + breakdown.engagement
        - breakdown.risk;
    (raw as f64 * 1.25).round().clamp(0.0, 100.0) as u8
}
