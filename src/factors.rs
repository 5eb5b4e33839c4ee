use crate::scoring::{CONTENT_MAX, ENGAGEMENT_MAX, MEDIA_MAX, TIMING_MAX};
use crate::{AlgorithmFactor, FactorStatus, ScoreBreakdown};

fn status(value: i32, optimal_at: i32, suboptimal_at: i32) -> FactorStatus {
    if value >= optimal_at {
        FactorStatus::Optimal
    } else if value >= suboptimal_at {
        FactorStatus::Suboptimal
    } else {
        FactorStatus::Harmful
    }
}

/// Always five factors, in a fixed order, normalized from the breakdown.
/// Weights and optimal ranges are display metadata only.
pub fn algorithm_factors(breakdown: &ScoreBreakdown) -> Vec<AlgorithmFactor> {
    vec![
        AlgorithmFactor {
            name: "Reply Potential".to_string(),
            description: "Replies = 13-27x value. Reply-to-reply = 75x! Questions drive replies."
                .to_string(),
            weight: 1.0,
            current_value: breakdown.engagement as f64 / ENGAGEMENT_MAX as f64,
            optimal_range: (0.6, 1.0),
            status: status(breakdown.engagement, 12, 8),
        },
        AlgorithmFactor {
            name: "Media Boost".to_string(),
            description: "Native video = 10x engagement. 4/5 sessions now include video."
                .to_string(),
            weight: 0.8,
            current_value: breakdown.media as f64 / MEDIA_MAX as f64,
            optimal_range: (0.5, 1.0),
            status: status(breakdown.media, 10, 1),
        },
        AlgorithmFactor {
            name: "Dwell Time".to_string(),
            description: "Users staying >3 seconds signals quality. Length and hooks matter."
                .to_string(),
            weight: 0.6,
            current_value: breakdown.content as f64 / CONTENT_MAX as f64,
            optimal_range: (0.5, 1.0),
            status: status(breakdown.content, 15, 10),
        },
        AlgorithmFactor {
            name: "Platform Retention".to_string(),
            description: "External links = ~0% reach for non-Premium. Keep users on the platform."
                .to_string(),
            weight: 0.95,
            current_value: (1.0 - breakdown.risk as f64 / 25.0).clamp(0.0, 1.0),
            optimal_range: (0.8, 1.0),
            // Risk is a penalty, so the thresholds invert.
            status: if breakdown.risk <= 5 {
                FactorStatus::Optimal
            } else if breakdown.risk <= 12 {
                FactorStatus::Suboptimal
            } else {
                FactorStatus::Harmful
            },
        },
        AlgorithmFactor {
            name: "Timing & Velocity".to_string(),
            description: "First 30 minutes critical. Peak hours: 9am-12pm, 7pm-10pm EST."
                .to_string(),
            weight: 0.5,
            current_value: breakdown.timing as f64 / TIMING_MAX as f64,
            optimal_range: (0.6, 1.0),
            status: status(breakdown.timing, 10, 6),
        },
    ]
}
