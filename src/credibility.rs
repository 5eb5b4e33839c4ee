use serde::{Deserialize, Serialize};

use crate::UserContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredibilityStatus {
    Good,
    Warning,
    Bad,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredibilityFactor {
    pub name: String,
    pub status: CredibilityStatus,
    pub tip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredibilityEstimate {
    pub score: f64,
    pub factors: Vec<CredibilityFactor>,
}

/// TweepCred-style estimate from observable account signals. The real signal
/// is internal to the platform; without context the engine assumes a fixed
/// neutral 0.7.
pub fn estimate_credibility(user: Option<&UserContext>) -> CredibilityEstimate {
    let Some(user) = user else {
        return CredibilityEstimate {
            score: 0.7,
            factors: Vec::new(),
        };
    };

    let mut score: f64 = 0.5;
    let mut factors = Vec::new();

    let ratio = user.follower_count as f64 / (user.following_count.max(1)) as f64;
    if ratio > 1.5 {
        score += 0.15;
        factors.push(CredibilityFactor {
            name: "Follower Ratio".to_string(),
            status: CredibilityStatus::Good,
            tip: "Healthy ratio signals authority".to_string(),
        });
    } else if ratio < 0.5 {
        score -= 0.1;
        factors.push(CredibilityFactor {
            name: "Follower Ratio".to_string(),
            status: CredibilityStatus::Warning,
            tip: "Following more than followers can look spammy".to_string(),
        });
    }

    if user.account_age_months > 24 {
        score += 0.1;
        factors.push(CredibilityFactor {
            name: "Account Age".to_string(),
            status: CredibilityStatus::Good,
            tip: "Established accounts get more trust".to_string(),
        });
    } else if user.account_age_months < 3 {
        score -= 0.1;
        factors.push(CredibilityFactor {
            name: "Account Age".to_string(),
            status: CredibilityStatus::Warning,
            tip: "New accounts have limited distribution initially".to_string(),
        });
    }

    if user.avg_engagement_rate > 0.03 {
        score += 0.1;
        factors.push(CredibilityFactor {
            name: "Engagement Rate".to_string(),
            status: CredibilityStatus::Good,
            tip: "High engagement signals quality content".to_string(),
        });
    } else if user.avg_engagement_rate < 0.01 {
        score -= 0.05;
        factors.push(CredibilityFactor {
            name: "Engagement Rate".to_string(),
            status: CredibilityStatus::Warning,
            tip: "Low engagement may affect distribution".to_string(),
        });
    }

    if user.is_premium {
        score += 0.1;
        factors.push(CredibilityFactor {
            name: "Premium Status".to_string(),
            status: CredibilityStatus::Good,
            tip: "2-4x visibility boost with Premium".to_string(),
        });
    }

    CredibilityEstimate {
        score: score.clamp(0.0, 1.0),
        factors,
    }
}
