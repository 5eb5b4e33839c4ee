use draft_score::copy::{rewrite_recommendation, score_summary, top_recommendation};
use draft_score::engine::score_draft;
use draft_score::features::extract_features;
use draft_score::suggest::generate_suggestions;
use draft_score::{
    Category, DraftTweet, Impact, PostTime, ScoreBreakdown, Suggestion, SuggestionKind,
};

fn peak_weekday() -> PostTime {
    PostTime::new(15, 3)
}

fn off_peak_weekday() -> PostTime {
    PostTime::new(7, 1)
}

fn draft_from_text(text: &str) -> DraftTweet {
    extract_features(text).into_draft(false, None)
}

fn breakdown_for(tweet: &DraftTweet, when: PostTime) -> ScoreBreakdown {
    score_draft(tweet, None, when).breakdown
}

#[test]
fn media_suggestion_fires_first_without_media() {
    let tweet = draft_from_text("short note");
    let breakdown = breakdown_for(&tweet, peak_weekday());
    let suggestions = generate_suggestions(&tweet, &breakdown, false, peak_weekday());

    let first = suggestions.first().expect("at least one suggestion");
    assert_eq!(first.category, Category::Media);
    assert_eq!(first.kind, SuggestionKind::Positive);
    assert_eq!(first.impact, Impact::High);
}

#[test]
fn link_warning_differs_by_premium() {
    let tweet = draft_from_text("full benchmark results at https://example.com/bench");
    let breakdown = breakdown_for(&tweet, peak_weekday());

    let premium = generate_suggestions(&tweet, &breakdown, true, peak_weekday());
    let free = generate_suggestions(&tweet, &breakdown, false, peak_weekday());

    let premium_msg = premium
        .iter()
        .find(|s| s.category == Category::Risk)
        .expect("premium link warning");
    let free_msg = free
        .iter()
        .find(|s| s.category == Category::Risk)
        .expect("non-premium link warning");

    assert!(premium_msg.message.contains("even with Premium"));
    assert!(free_msg.message.contains("~0% reach"));
    assert_ne!(premium_msg.message, free_msg.message);
}

#[test]
fn several_risk_suggestions_can_coexist() {
    let tweet = draft_from_text(
        "hot take: this framework is terrible garbage https://example.com #one #two #three #four",
    );
    let breakdown = breakdown_for(&tweet, peak_weekday());
    let suggestions = generate_suggestions(&tweet, &breakdown, false, peak_weekday());

    let risk_count = suggestions
        .iter()
        .filter(|s| s.category == Category::Risk)
        .count();
    // Link + hashtags + template + negative tone.
    assert_eq!(risk_count, 4);
}

#[test]
fn short_draft_gets_interpolated_length_warning() {
    let tweet = draft_from_text("short note");
    let breakdown = breakdown_for(&tweet, peak_weekday());
    let suggestions = generate_suggestions(&tweet, &breakdown, false, peak_weekday());

    assert!(suggestions
        .iter()
        .any(|s| s.category == Category::Content && s.message.contains("(10 chars)")));
}

#[test]
fn long_unthreaded_draft_suggests_thread() {
    let text = "x".repeat(260);
    let tweet = draft_from_text(&text);
    assert!(!tweet.is_thread);
    let breakdown = breakdown_for(&tweet, peak_weekday());
    let suggestions = generate_suggestions(&tweet, &breakdown, false, peak_weekday());

    assert!(suggestions
        .iter()
        .any(|s| s.message == "Consider making this a thread"));
}

#[test]
fn positive_tone_yields_low_impact_engagement_note() {
    let tweet = draft_from_text("grateful for an amazing community, thank you all");
    let breakdown = breakdown_for(&tweet, peak_weekday());
    let suggestions = generate_suggestions(&tweet, &breakdown, false, peak_weekday());

    let tone = suggestions
        .iter()
        .find(|s| s.message.contains("Positive tone"))
        .expect("positive tone note");
    assert_eq!(tone.kind, SuggestionKind::Positive);
    assert_eq!(tone.category, Category::Engagement);
    assert_eq!(tone.impact, Impact::Low);
    assert!(tone.action.is_none());
}

#[test]
fn timing_hint_fires_off_peak_only() {
    let tweet = draft_from_text("early morning shipping note");
    let off_peak = off_peak_weekday();
    let breakdown = breakdown_for(&tweet, off_peak);
    assert!(breakdown.timing < 12);

    let suggestions = generate_suggestions(&tweet, &breakdown, false, off_peak);
    let timing = suggestions
        .iter()
        .find(|s| s.category == Category::Timing)
        .expect("timing hint");
    assert_eq!(timing.impact, Impact::Low);
    assert!(timing.action.as_deref().unwrap_or_default().contains("peak hours"));

    let peak = peak_weekday();
    let peak_breakdown = breakdown_for(&tweet, peak);
    let peak_suggestions = generate_suggestions(&tweet, &peak_breakdown, false, peak);
    assert!(!peak_suggestions.iter().any(|s| s.category == Category::Timing));
}

#[test]
fn top_recommendation_prefers_first_high_impact() {
    let tweet = draft_from_text("short note");
    let score = score_draft(&tweet, None, peak_weekday());

    // Rule order puts the media suggestion first among the highs, and the
    // rewrite table maps it to benefit-led copy.
    assert_eq!(
        top_recommendation(&score).as_deref(),
        Some("Add media for 12-20% engagement boost")
    );
}

#[test]
fn rewrite_table_matches_keywords() {
    let hashtag = Suggestion {
        kind: SuggestionKind::Negative,
        category: Category::Risk,
        message: "Too many hashtags (5) triggers spam detection".to_string(),
        impact: Impact::Medium,
        action: None,
    };
    assert_eq!(
        rewrite_recommendation(&hashtag),
        "Reduce hashtags to 1-2 for better distribution"
    );

    let unmapped = Suggestion {
        kind: SuggestionKind::Neutral,
        category: Category::Content,
        message: "Something bespoke".to_string(),
        impact: Impact::Low,
        action: None,
    };
    assert_eq!(rewrite_recommendation(&unmapped), "Something bespoke");
}

#[test]
fn summary_bands_cover_the_range() {
    assert_eq!(
        score_summary(95),
        "Exceptional engagement potential with optimal signals"
    );
    assert_eq!(score_summary(72), "Solid foundation with room for improvement");
    assert_eq!(score_summary(20), "Major revisions recommended before posting");
}
