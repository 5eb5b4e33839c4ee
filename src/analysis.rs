use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use thiserror::Error;

use crate::MediaType;

const DEFAULT_API_BASE: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Failures of the deep-analysis collaborator. Every internal error converts
/// to one of these; nothing else crosses the boundary.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no API key configured; set ANALYSIS_API_KEY")]
    MissingApiKey,
    #[error("analysis API error {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("rate limited by the analysis API")]
    RateLimited,
    #[error("unparsable analysis response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Likelihood {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalityAssessment {
    pub score: u8,
    pub assessment: String,
    #[serde(default)]
    pub similar_patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceAlignment {
    pub score: u8,
    pub target_audience: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementOutlook {
    pub reply_likelihood: Likelihood,
    pub viral_potential: Likelihood,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteSuggestion {
    pub improved: String,
    pub explanation: String,
}

/// Structured result of one deep-analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub originality: OriginalityAssessment,
    pub audience_alignment: AudienceAlignment,
    pub engagement_prediction: EngagementOutlook,
    #[serde(default)]
    pub rewrite_suggestions: Vec<RewriteSuggestion>,
    pub overall_insight: String,
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    pub has_media: bool,
    pub media_type: Option<MediaType>,
    pub is_premium: bool,
    pub recent_posts: Vec<String>,
}

#[derive(Clone)]
pub struct DeepAnalysisClient {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl DeepAnalysisClient {
    pub fn from_env() -> Result<Self, AnalysisError> {
        let api_key = env::var("ANALYSIS_API_KEY").map_err(|_| AnalysisError::MissingApiKey)?;
        let api_base =
            env::var("ANALYSIS_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let model = env::var("ANALYSIS_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| AnalysisError::Upstream {
                status: 0,
                message: format!("failed to build client: {}", err),
            })?;
        Ok(Self {
            client,
            api_key,
            api_base,
            model,
        })
    }

    pub async fn analyze(
        &self,
        text: &str,
        context: &AnalysisContext,
    ) -> Result<AnalysisReport, AnalysisError> {
        let url = format!("{}/v1/messages", self.api_base.trim_end_matches('/'));
        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: 1024,
            system: system_prompt(),
            messages: vec![Message {
                role: "user".to_string(),
                content: user_prompt(text, context),
            }],
        };

        tracing::debug!(model = %self.model, "requesting deep analysis");

        let response = self
            .client
            .post(url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|err| AnalysisError::Upstream {
                status: 0,
                message: format!("request failed: {}", err),
            })?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(AnalysisError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Upstream {
                status: status.as_u16(),
                message: body.trim().to_string(),
            });
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|err| AnalysisError::InvalidResponse(format!("bad JSON envelope: {}", err)))?;

        let content = body
            .content
            .first()
            .map(|block| block.text.trim())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| AnalysisError::InvalidResponse("empty response".to_string()))?;

        parse_report(content)
    }
}

/// Pulls the first JSON object out of the model output (markdown fences
/// included) and deserializes it.
pub fn parse_report(content: &str) -> Result<AnalysisReport, AnalysisError> {
    let json = extract_json(content)
        .ok_or_else(|| AnalysisError::InvalidResponse("no JSON object found".to_string()))?;
    serde_json::from_str(&json).map_err(|err| AnalysisError::InvalidResponse(err.to_string()))
}

fn extract_json(text: &str) -> Option<String> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start >= end {
        return None;
    }
    Some(text[start..=end].to_string())
}

#[derive(Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

fn system_prompt() -> String {
    r#"You are an expert feed-ranking analyst. Analyze draft posts and provide actionable feedback to maximize reach and engagement.

Key facts you know:
- Replies are far more valuable than likes; author replies multiply reach
- External links get near-zero reach for non-Premium accounts
- Native video strongly outperforms text
- Dwell time matters: readers must stay more than 3 seconds
- Negative sentiment reduces distribution
- Template/duplicate content is penalized
- First 30 minutes of engagement velocity is critical
- Questions drive replies

Analyze posts for originality, engagement hooks, audience fit, and concrete rewrites. Be concise but actionable."#
        .to_string()
}

fn user_prompt(text: &str, context: &AnalysisContext) -> String {
    let media = if context.has_media {
        format!(
            "Yes ({})",
            context.media_type.map_or("unspecified", MediaType::label)
        )
    } else {
        "No".to_string()
    };

    let mut prompt = format!(
        r#"Analyze this draft post for feed-ranking optimization:

"{}"

Context:
- Has media: {}
- Premium account: {}
"#,
        text,
        media,
        if context.is_premium { "Yes" } else { "No/Unknown" }
    );

    if !context.recent_posts.is_empty() {
        prompt.push_str("- Recent posts by this author:\n");
        for recent in context.recent_posts.iter().take(3) {
            prompt.push_str(&format!("  \"{}\"\n", recent));
        }
    }

    prompt.push_str(
        r#"
Respond with a single JSON object:
{
  "originality": {"score": <0-100>, "assessment": "<brief>", "similarPatterns": ["<templates detected>"]},
  "audienceAlignment": {"score": <0-100>, "targetAudience": "<who>", "suggestions": ["<targeting tips>"]},
  "engagementPrediction": {"replyLikelihood": "<low|medium|high>", "viralPotential": "<low|medium|high>", "reasoning": "<why>"},
  "rewriteSuggestions": [{"improved": "<rewritten post>", "explanation": "<why better>"}],
  "overallInsight": "<one key actionable insight>"
}
Output JSON only."#,
    );

    prompt
}
