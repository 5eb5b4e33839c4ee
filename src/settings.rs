use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::UserContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    Auto,
    Light,
    Dark,
}

/// Options recognized by the composer overlay and popup, persisted as TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionSettings {
    pub enabled: bool,
    pub show_score_in_composer: bool,
    pub show_score_on_timeline: bool,
    pub show_suggestions: bool,
    pub min_score_alert: u8,
    pub dark_mode: DarkMode,
    pub analytics_enabled: bool,
    pub onboarding_completed: bool,
    pub ai_consent_accepted: bool,
    pub animations_enabled: bool,
    pub user_context: Option<UserContext>,
}

impl Default for ExtensionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            show_score_in_composer: true,
            show_score_on_timeline: false,
            show_suggestions: true,
            min_score_alert: 50,
            dark_mode: DarkMode::Auto,
            analytics_enabled: false,
            onboarding_completed: false,
            ai_consent_accepted: false,
            animations_enabled: true,
            user_context: None,
        }
    }
}

impl ExtensionSettings {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let settings_path = path.or_else(default_settings_path);
        let mut settings = if let Some(path) = settings_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read settings: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse settings: {}", err))?
            } else {
                ExtensionSettings::default()
            }
        } else {
            ExtensionSettings::default()
        };

        settings.apply_env_overrides();
        Ok((settings, settings_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create settings dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize settings: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write settings: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(enabled) = env::var("DRAFT_SCORE_ENABLED") {
            if let Ok(value) = enabled.parse::<bool>() {
                self.enabled = value;
            }
        }
        if let Ok(alert) = env::var("DRAFT_SCORE_MIN_SCORE_ALERT") {
            if let Ok(value) = alert.parse::<u8>() {
                self.min_score_alert = value.min(100);
            }
        }
        if let Ok(analytics) = env::var("DRAFT_SCORE_ANALYTICS") {
            if let Ok(value) = analytics.parse::<bool>() {
                self.analytics_enabled = value;
            }
        }
    }
}

fn default_settings_path() -> Option<PathBuf> {
    env::var("DRAFT_SCORE_SETTINGS_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/settings.toml")))
}
