use serde::{Deserialize, Serialize};

use draft_score::credibility::CredibilityEstimate;
use draft_score::engine::ScoredVariant;
use draft_score::features::extract_features;
use draft_score::history::LogSource;
use draft_score::{copy, credibility, DraftTweet, MediaType, PostTime, TweetScore, UserContext};

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub text: Option<String>,
    pub has_media: Option<bool>,
    pub media: Option<String>,
    pub media_count: Option<u32>,
    pub thread_length: Option<u32>,
    pub is_reply: Option<bool>,
    pub quote_tweet: Option<bool>,
    pub utc_hour: Option<u8>,
    pub day_of_week: Option<u8>,
    pub user: Option<UserContext>,
    pub source: Option<LogSource>,
}

impl ScoreRequest {
    pub fn into_parts(self) -> Result<(DraftTweet, Option<UserContext>, PostTime), String> {
        let text = self.text.unwrap_or_default();
        if text.trim().is_empty() {
            return Err("text is required".to_string());
        }

        let media_type = match self.media.as_deref() {
            Some(value) => Some(
                MediaType::from_str(value).ok_or_else(|| format!("invalid media type: {}", value))?,
            ),
            None => None,
        };
        let has_media = self.has_media.unwrap_or(media_type.is_some());

        let mut tweet = extract_features(&text).into_draft(has_media, media_type);
        tweet.media_count = self.media_count;
        if let Some(thread_length) = self.thread_length {
            tweet.is_thread = true;
            tweet.thread_length = Some(thread_length.max(1));
        }
        tweet.is_reply = self.is_reply.unwrap_or(false);
        tweet.quote_tweet = self.quote_tweet.unwrap_or(false);

        let when = match self.utc_hour {
            Some(hour) => {
                let day = self.day_of_week.unwrap_or_else(|| PostTime::now().day_of_week);
                PostTime::new(hour, day)
            }
            None => PostTime::now(),
        };

        Ok((tweet, self.user, when))
    }
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: TweetScore,
    pub summary: &'static str,
    pub top_recommendation: Option<String>,
    pub credibility: CredibilityEstimate,
    pub history_id: Option<String>,
}

impl ScoreResponse {
    pub fn from_score(score: TweetScore, user: Option<&UserContext>) -> Self {
        Self {
            summary: copy::score_summary(score.overall),
            top_recommendation: copy::top_recommendation(&score),
            credibility: credibility::estimate_credibility(user),
            history_id: None,
            score,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VariantsRequest {
    pub text: Option<String>,
    pub utc_hour: Option<u8>,
    pub day_of_week: Option<u8>,
    pub user: Option<UserContext>,
}

#[derive(Debug, Serialize)]
pub struct VariantsResponse {
    pub original: TweetScore,
    pub variants: Vec<ScoredVariant>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: Option<String>,
    pub has_media: Option<bool>,
    pub media: Option<String>,
    pub is_premium: Option<bool>,
    #[serde(default)]
    pub recent_posts: Vec<String>,
}
