use draft_score::engine::{quick_score, score_draft};
use draft_score::features::extract_features;
use draft_score::reach::predict_reach;
use draft_score::scoring::{media_score, risk_score};
use draft_score::{DraftTweet, Grade, MediaType, PostTime, UserContext};

// Peak weekday afternoon: timing lands on its 15-point cap.
fn peak_weekday() -> PostTime {
    PostTime::new(15, 3)
}

fn draft_from_text(text: &str) -> DraftTweet {
    extract_features(text).into_draft(false, None)
}

fn premium_user(is_premium: bool) -> UserContext {
    UserContext {
        is_premium,
        ..UserContext::default()
    }
}

#[test]
fn overall_score_stays_in_bounds() {
    let extremes = [
        String::new(),
        "#a ".repeat(50),
        "@a ".repeat(30),
        "https://a.com ".repeat(10),
        "hate hate terrible awful worst garbage trash".to_string(),
        "x".repeat(500),
        "What a great day? 🚀 ".repeat(10),
    ];

    for text in extremes {
        let tweet = draft_from_text(&text);
        for user in [None, Some(premium_user(true)), Some(premium_user(false))] {
            let score = score_draft(&tweet, user.as_ref(), peak_weekday());
            assert!(score.overall <= 100);
        }
    }
}

#[test]
fn breakdown_fields_respect_caps() {
    let text = format!(
        "{} {} {}",
        "https://a.com https://b.com https://c.com",
        "#one #two #three #four #five ".repeat(10),
        "@a @b @c @d @e @f @g @h @i @j"
    );
    let mut tweet = draft_from_text(&text);
    tweet.has_media = true;
    tweet.media_type = Some(MediaType::Video);
    tweet.media_count = Some(10);

    let score = score_draft(&tweet, None, peak_weekday());

    assert!(score.breakdown.content <= 25);
    assert!(score.breakdown.media <= 20);
    assert!(score.breakdown.timing <= 15);
    assert!(score.breakdown.engagement <= 20);
    assert!(score.breakdown.risk <= 30);
    assert!(score.breakdown.risk >= 0);
}

#[test]
fn fifty_hashtags_still_cap_risk() {
    let text = format!(
        "https://a.com https://b.com https://c.com {} @a @b @c @d @e @f @g @h @i @j",
        (0..50).map(|i| format!("#t{}", i)).collect::<Vec<_>>().join(" ")
    );
    let tweet = draft_from_text(&text);
    assert!(risk_score(&tweet, false) <= 30);
}

#[test]
fn grade_is_monotonic_step_function() {
    fn rank(grade: Grade) -> u8 {
        match grade {
            Grade::F => 0,
            Grade::D => 1,
            Grade::C => 2,
            Grade::B => 3,
            Grade::A => 4,
            Grade::S => 5,
        }
    }

    let mut previous = rank(Grade::from_score(0));
    for score in 1..=100u8 {
        let current = rank(Grade::from_score(score));
        assert!(current >= previous, "grade regressed at score {}", score);
        previous = current;
    }

    assert_eq!(Grade::from_score(90), Grade::S);
    assert_eq!(Grade::from_score(80), Grade::A);
    assert_eq!(Grade::from_score(65), Grade::B);
    assert_eq!(Grade::from_score(50), Grade::C);
    assert_eq!(Grade::from_score(35), Grade::D);
    assert_eq!(Grade::from_score(34), Grade::F);
}

#[test]
fn reach_range_holds_for_all_scores() {
    let audiences = [None, Some(premium_user(false))];
    for overall in 0..=100u8 {
        for user in &audiences {
            let reach = predict_reach(overall, user.as_ref());
            assert!(reach.low <= reach.median, "low > median at {}", overall);
            assert!(reach.median <= reach.high, "median > high at {}", overall);
            assert!(reach.confidence > 0.0 && reach.confidence <= 1.0);
        }
    }
}

#[test]
fn reach_boundaries() {
    let at_zero = predict_reach(0, None);
    assert_eq!(at_zero.median, 100);
    assert!((at_zero.confidence - 0.5).abs() < 1e-9);

    // Variance collapses at the top score.
    let at_hundred = predict_reach(100, None);
    assert_eq!(at_hundred.low, at_hundred.median);
    assert_eq!(at_hundred.high, at_hundred.median);
    assert!((at_hundred.confidence - 0.9).abs() < 1e-9);
}

#[test]
fn scoring_is_idempotent_at_a_frozen_instant() {
    let tweet = draft_from_text(
        "What does a healthy engineering culture look like in practice? Curious about concrete rituals that survived scale.",
    );
    let user = premium_user(true);
    let when = peak_weekday();

    let first = score_draft(&tweet, Some(&user), when);
    let second = score_draft(&tweet, Some(&user), when);

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn premium_softens_link_penalty() {
    let tweet = draft_from_text("new write-up here https://example.com/post");

    let premium = score_draft(&tweet, Some(&premium_user(true)), peak_weekday());
    let free = score_draft(&tweet, Some(&premium_user(false)), peak_weekday());

    assert!(premium.breakdown.risk < free.breakdown.risk);
    assert_eq!(premium.breakdown.risk, 8);
    assert_eq!(free.breakdown.risk, 15);
}

#[test]
fn generic_gm_post_scores_poorly() {
    let tweet = draft_from_text("gm");
    let score = score_draft(&tweet, None, peak_weekday());

    // Template penalty plus the short-length penalty.
    assert_eq!(score.breakdown.content, 7);
    assert_eq!(score.breakdown.risk, 5);
    assert!(score.overall < 40);
    assert!(matches!(score.grade, Grade::D | Grade::F));
}

#[test]
fn question_at_sweet_spot_length_skips_question_suggestion() {
    let mut text = "What makes a good engineering culture? ".to_string();
    while text.chars().count() < 200 {
        text.push('x');
    }
    let tweet = draft_from_text(&text);
    assert_eq!(tweet.length, 200);
    assert!(tweet.has_question);

    let score = score_draft(&tweet, None, peak_weekday());
    assert!(score.breakdown.engagement >= 13);
    assert!(!score
        .suggestions
        .iter()
        .any(|s| s.message.contains("Add a question")));
}

#[test]
fn non_premium_link_penalty_caps_at_twenty() {
    let tweet = draft_from_text("https://a.com https://b.com https://c.com");
    assert_eq!(tweet.external_links, 3);
    assert_eq!(risk_score(&tweet, false), 20);
}

#[test]
fn video_media_score_hits_cap() {
    let tweet = DraftTweet {
        has_media: true,
        media_type: Some(MediaType::Video),
        ..DraftTweet::default()
    };
    assert_eq!(media_score(&tweet), 20);
}

#[test]
fn quick_score_handles_empty_text() {
    let score = quick_score("", false);
    assert!(score <= 40);

    let whitespace = quick_score("   \n\t  ", false);
    assert!(whitespace <= 40);
}
