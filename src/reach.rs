use crate::{ReachPrediction, UserContext};

const DEFAULT_FOLLOWER_COUNT: u64 = 1_000;

/// Impression-range estimate from the overall score and audience size.
/// Higher scores widen the reach percentage and tighten the variance.
pub fn predict_reach(overall: u8, user: Option<&UserContext>) -> ReachPrediction {
    let followers = user.map_or(DEFAULT_FOLLOWER_COUNT, |u| u.follower_count) as f64;
    let score = overall as f64;

    // 10%-40% of followers depending on score.
    let base_reach_percent = 0.1 + (score / 100.0) * 0.3;
    let base_reach = (followers * base_reach_percent).floor();

    let variance = 0.5 - score / 200.0;

    ReachPrediction {
        low: (base_reach * (1.0 - variance)).floor() as u64,
        median: base_reach as u64,
        high: (base_reach * (1.0 + variance * 2.0)).floor() as u64,
        confidence: (0.5 + score / 200.0).min(0.9),
    }
}
