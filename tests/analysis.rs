use draft_score::analysis::{parse_report, AnalysisError, Likelihood};

const VALID_REPORT: &str = r#"{
  "originality": {"score": 72, "assessment": "Mostly original framing", "similarPatterns": []},
  "audienceAlignment": {"score": 60, "targetAudience": "backend engineers", "suggestions": ["name the stack"]},
  "engagementPrediction": {"replyLikelihood": "medium", "viralPotential": "low", "reasoning": "niche topic"},
  "rewriteSuggestions": [{"improved": "better draft", "explanation": "stronger hook"}],
  "overallInsight": "Lead with the outcome."
}"#;

#[test]
fn parses_a_bare_json_report() {
    let report = parse_report(VALID_REPORT).unwrap();
    assert_eq!(report.originality.score, 72);
    assert_eq!(report.audience_alignment.target_audience, "backend engineers");
    assert_eq!(report.engagement_prediction.reply_likelihood, Likelihood::Medium);
    assert_eq!(report.engagement_prediction.viral_potential, Likelihood::Low);
    assert_eq!(report.rewrite_suggestions.len(), 1);
    assert_eq!(report.overall_insight, "Lead with the outcome.");
}

#[test]
fn parses_a_fenced_json_report() {
    let fenced = format!("Here is the analysis:\n```json\n{}\n```\nHope it helps!", VALID_REPORT);
    let report = parse_report(&fenced).unwrap();
    assert_eq!(report.originality.score, 72);
}

#[test]
fn missing_json_maps_to_invalid_response() {
    let err = parse_report("I could not analyze this post.").unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidResponse(_)));
}

#[test]
fn wrong_shape_maps_to_invalid_response() {
    let err = parse_report(r#"{"unexpected": true}"#).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidResponse(_)));
}

#[test]
fn errors_render_stable_messages() {
    assert_eq!(
        AnalysisError::MissingApiKey.to_string(),
        "no API key configured; set ANALYSIS_API_KEY"
    );
    assert_eq!(
        AnalysisError::RateLimited.to_string(),
        "rate limited by the analysis API"
    );
    assert_eq!(
        AnalysisError::Upstream {
            status: 500,
            message: "overloaded".to_string()
        }
        .to_string(),
        "analysis API error 500: overloaded"
    );
}
