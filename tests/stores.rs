use std::path::PathBuf;

use draft_score::engine::score_draft;
use draft_score::features::extract_features;
use draft_score::history::{HistoryStore, LogSource, LogStatus, ScoreLogEntry, ScoreLogUpdate};
use draft_score::settings::{DarkMode, ExtensionSettings};
use draft_score::{PostTime, UserContext};

fn temp_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}-{:016x}.tmp", prefix, rand::random::<u64>()))
}

fn sample_entry(text: &str) -> ScoreLogEntry {
    let tweet = extract_features(text).into_draft(false, None);
    let score = score_draft(&tweet, None, PostTime::new(15, 3));
    ScoreLogEntry::from_score(&tweet, &score, LogSource::Cli)
}

#[tokio::test]
async fn history_keeps_newest_first_and_caps_at_hundred() {
    let path = temp_path("draft-score-history");
    let store = HistoryStore::load(path.clone()).await.unwrap();

    let mut last_id = String::new();
    for i in 0..105 {
        let entry = store
            .append(sample_entry(&format!("draft number {}", i)))
            .await
            .unwrap();
        last_id = entry.id;
    }

    let exported = store.export().await;
    assert_eq!(exported.len(), 100);
    assert_eq!(exported[0].id, last_id);

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn history_survives_reload() {
    let path = temp_path("draft-score-history");
    {
        let store = HistoryStore::load(path.clone()).await.unwrap();
        store.append(sample_entry("persisted draft")).await.unwrap();
    }

    let reloaded = HistoryStore::load(path.clone()).await.unwrap();
    let exported = reloaded.export().await;
    assert_eq!(exported.len(), 1);
    assert_eq!(exported[0].tweet_preview.as_deref(), Some("persisted draft"));

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn history_update_marks_entry_posted() {
    let path = temp_path("draft-score-history");
    let store = HistoryStore::load(path.clone()).await.unwrap();

    let entry = store.append(sample_entry("about to post")).await.unwrap();
    assert_eq!(entry.status, LogStatus::Draft);

    let updated = store
        .update(
            &entry.id,
            ScoreLogUpdate {
                tweet_id: Some("190000000".to_string()),
                status: Some(LogStatus::Posted),
                ..ScoreLogUpdate::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, LogStatus::Posted);
    assert_eq!(updated.tweet_id.as_deref(), Some("190000000"));

    let missing = store.update("no-such-id", ScoreLogUpdate::default()).await;
    assert!(missing.is_err());

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn history_clear_empties_the_log() {
    let path = temp_path("draft-score-history");
    let store = HistoryStore::load(path.clone()).await.unwrap();

    store.append(sample_entry("one")).await.unwrap();
    store.append(sample_entry("two")).await.unwrap();
    store.clear().await.unwrap();

    assert!(store.export().await.is_empty());

    let _ = tokio::fs::remove_file(&path).await;
}

#[test]
fn settings_round_trip_through_toml() {
    let path = temp_path("draft-score-settings");

    let mut settings = ExtensionSettings::default();
    settings.min_score_alert = 65;
    settings.dark_mode = DarkMode::Dark;
    settings.analytics_enabled = true;
    settings.user_context = Some(UserContext {
        follower_count: 12_000,
        is_premium: true,
        ..UserContext::default()
    });

    settings.write(&path).unwrap();
    let (loaded, _) = ExtensionSettings::load(Some(path.clone())).unwrap();

    assert_eq!(loaded.min_score_alert, 65);
    assert_eq!(loaded.dark_mode, DarkMode::Dark);
    assert!(loaded.analytics_enabled);
    let context = loaded.user_context.expect("persisted user context");
    assert_eq!(context.follower_count, 12_000);
    assert!(context.is_premium);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_settings_file_falls_back_to_defaults() {
    let path = temp_path("draft-score-settings-missing");
    let (loaded, _) = ExtensionSettings::load(Some(path)).unwrap();

    assert!(loaded.enabled);
    assert!(loaded.show_score_in_composer);
    assert!(!loaded.show_score_on_timeline);
    assert_eq!(loaded.min_score_alert, 50);
    assert_eq!(loaded.dark_mode, DarkMode::Auto);
    assert!(!loaded.analytics_enabled);
    assert!(!loaded.onboarding_completed);
    assert!(!loaded.ai_consent_accepted);
    assert!(loaded.animations_enabled);
    assert!(loaded.user_context.is_none());
}
