use serde::{Deserialize, Serialize};

use crate::features::extract_features;
use crate::scoring::{overall_score, score_breakdown};
use crate::suggest::generate_suggestions;
use crate::variants::{generate_variants, Variant};
use crate::{factors, reach, DraftTweet, Grade, PostTime, TweetScore, UserContext};

/// Scores a draft against the heuristic ranking model. Total: every
/// well-formed draft yields a score, and identical inputs at the same
/// `PostTime` yield identical output.
pub fn score_draft(
    tweet: &DraftTweet,
    user: Option<&UserContext>,
    when: PostTime,
) -> TweetScore {
    let is_premium = user.map_or(false, |u| u.is_premium);
    let breakdown = score_breakdown(tweet, user, when);
    let overall = overall_score(&breakdown);

    TweetScore {
        overall,
        grade: Grade::from_score(overall),
        suggestions: generate_suggestions(tweet, &breakdown, is_premium, when),
        predicted_reach: reach::predict_reach(overall, user),
        algorithm_factors: factors::algorithm_factors(&breakdown),
        breakdown,
    }
}

pub fn score_draft_now(tweet: &DraftTweet, user: Option<&UserContext>) -> TweetScore {
    score_draft(tweet, user, PostTime::now())
}

/// Lightweight path for real-time composer updates: extraction plus scoring
/// with reply/quote defaulted to false.
pub fn quick_score(text: &str, has_media: bool) -> u8 {
    let tweet = extract_features(text).into_draft(has_media, None);
    score_draft(&tweet, None, PostTime::now()).overall
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredVariant {
    pub variant: Variant,
    pub score: TweetScore,
}

/// Runs every generated variant through the full pipeline for side-by-side
/// comparison with the original.
pub fn score_variants(
    text: &str,
    user: Option<&UserContext>,
    when: PostTime,
) -> Vec<ScoredVariant> {
    generate_variants(text)
        .into_iter()
        .map(|variant| {
            let tweet = extract_features(&variant.text).into_draft(false, None);
            let score = score_draft(&tweet, user, when);
            ScoredVariant { variant, score }
        })
        .collect()
}
