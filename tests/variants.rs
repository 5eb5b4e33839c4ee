use draft_score::engine::score_variants;
use draft_score::variants::generate_variants;
use draft_score::PostTime;

#[test]
fn empty_input_generates_nothing() {
    assert!(generate_variants("").is_empty());
    assert!(generate_variants("   \n ").is_empty());
}

#[test]
fn same_text_always_yields_same_variants() {
    let text = "we rewrote our ingestion pipeline and cut p99 latency in half";
    let first = generate_variants(text);
    let second = generate_variants(text);

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn caps_at_three_in_fixed_rule_order() {
    // No hook, no question, short, no digits: four rules would fire.
    let variants = generate_variants("our team finally fixed the flaky integration suite");
    assert_eq!(variants.len(), 3);
    assert_eq!(variants[0].id, "hook");
    assert_eq!(variants[1].id, "question-cta");
    assert_eq!(variants[2].id, "question-format");
}

#[test]
fn question_text_skips_question_strategies() {
    let variants = generate_variants("what would you change about code review?");
    assert!(variants.iter().all(|v| v.id != "question-cta"));
    assert!(variants.iter().all(|v| v.id != "question-format"));
}

#[test]
fn existing_hook_skips_hook_variant() {
    let variants = generate_variants("Hot take: code review is mostly theater");
    assert!(variants.iter().all(|v| v.id != "hook"));
}

#[test]
fn long_prose_gets_thread_teaser() {
    let text = "We spent three months migrating the billing system off the legacy queue and the hardest part was not the code. It was convincing every downstream team that their retry assumptions were wrong. Everything broke quietly.";
    assert!(text.chars().count() > 200);

    let variants = generate_variants(text);
    let teaser = variants
        .iter()
        .find(|v| v.id == "thread")
        .expect("thread teaser variant");
    assert!(teaser.text.contains("🧵"));
    assert!(teaser.text.starts_with("We spent three months"));
}

#[test]
fn variants_score_through_the_full_pipeline() {
    let when = PostTime::new(15, 3);
    let scored = score_variants("our team finally fixed the flaky integration suite", None, when);

    assert_eq!(scored.len(), 3);
    for entry in &scored {
        assert!(entry.score.overall <= 100);
        assert_eq!(entry.score.algorithm_factors.len(), 5);
    }
}
