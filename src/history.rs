use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::{DraftTweet, Grade, MediaType, ReachPrediction, TweetScore};

const HISTORY_CAP: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogSource {
    Popup,
    Composer,
    Timeline,
    Cli,
    Api,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Draft,
    Posted,
}

/// One scored draft, as persisted for prediction-accuracy tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreLogEntry {
    pub id: String,
    pub tweet_id: Option<String>,
    pub score: u8,
    pub grade: Grade,
    pub predicted_reach: ReachPrediction,
    pub timestamp: i64,
    pub has_media: bool,
    pub media_type: Option<MediaType>,
    pub external_links: u32,
    pub hashtags: u32,
    pub mentions: u32,
    pub length: u32,
    pub is_thread: bool,
    pub is_reply: bool,
    pub source: LogSource,
    pub status: LogStatus,
    pub tweet_preview: Option<String>,
    pub ai_overall_insight: Option<String>,
}

impl ScoreLogEntry {
    pub fn from_score(tweet: &DraftTweet, score: &TweetScore, source: LogSource) -> Self {
        let preview: String = tweet.text.chars().take(80).collect();
        Self {
            id: generate_id(),
            tweet_id: None,
            score: score.overall,
            grade: score.grade,
            predicted_reach: score.predicted_reach,
            timestamp: chrono::Utc::now().timestamp_millis(),
            has_media: tweet.has_media,
            media_type: tweet.media_type,
            external_links: tweet.external_links,
            hashtags: tweet.hashtags,
            mentions: tweet.mentions,
            length: tweet.length,
            is_thread: tweet.is_thread,
            is_reply: tweet.is_reply,
            source,
            status: LogStatus::Draft,
            tweet_preview: (!preview.is_empty()).then_some(preview),
            ai_overall_insight: None,
        }
    }
}

/// Fields that may change after the entry is first written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreLogUpdate {
    pub tweet_id: Option<String>,
    pub status: Option<LogStatus>,
    pub ai_overall_insight: Option<String>,
}

fn generate_id() -> String {
    format!("{:016x}", rand::random::<u64>())
}

/// Append-only history log, newest first, capped at the 100 most recent
/// entries. Writes go through a temp file then rename.
pub struct HistoryStore {
    path: PathBuf,
    entries: Mutex<Vec<ScoreLogEntry>>,
}

impl HistoryStore {
    pub async fn load(path: PathBuf) -> Result<Self, String> {
        let entries = if path.exists() {
            let data = tokio::fs::read_to_string(&path)
                .await
                .map_err(|err| format!("failed to read history: {}", err))?;
            if data.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&data)
                    .map_err(|err| format!("failed to parse history: {}", err))?
            }
        } else {
            Vec::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub async fn append(&self, entry: ScoreLogEntry) -> Result<ScoreLogEntry, String> {
        let mut guard = self.entries.lock().await;
        guard.insert(0, entry.clone());
        if guard.len() > HISTORY_CAP {
            guard.truncate(HISTORY_CAP);
        }
        self.persist(&guard).await?;
        tracing::debug!(id = %entry.id, score = entry.score, "logged score to history");
        Ok(entry)
    }

    pub async fn update(&self, id: &str, update: ScoreLogUpdate) -> Result<ScoreLogEntry, String> {
        let mut guard = self.entries.lock().await;
        let entry = guard
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| format!("history entry not found: {}", id))?;

        if let Some(tweet_id) = update.tweet_id {
            entry.tweet_id = Some(tweet_id);
        }
        if let Some(status) = update.status {
            entry.status = status;
        }
        if let Some(insight) = update.ai_overall_insight {
            entry.ai_overall_insight = Some(insight);
        }

        let updated = entry.clone();
        self.persist(&guard).await?;
        Ok(updated)
    }

    pub async fn export(&self) -> Vec<ScoreLogEntry> {
        let guard = self.entries.lock().await;
        guard.clone()
    }

    pub async fn clear(&self) -> Result<(), String> {
        let mut guard = self.entries.lock().await;
        guard.clear();
        self.persist(&guard).await
    }

    async fn persist(&self, entries: &[ScoreLogEntry]) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent).await?;
        }
        let payload = serde_json::to_string_pretty(entries)
            .map_err(|err| format!("failed to serialize history: {}", err))?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, payload)
            .await
            .map_err(|err| format!("failed to write history: {}", err))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|err| format!("failed to finalize history: {}", err))?;
        Ok(())
    }
}

async fn ensure_dir(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Ok(());
    }
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|err| format!("failed to create history dir: {}", err))
}
