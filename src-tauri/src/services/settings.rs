//! Settings store
//!
//! Persists reminder configuration, custom reminder definitions and global
//! flags using JSON file storage. An in-memory copy serves reads; every
//! mutation is written back to disk before the call returns.

use crate::config::{NO_SOUND, SETTINGS_FILE_NAME};
use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;

/// Persisted settings for one reminder kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub enabled: bool,
    /// Minutes between triggers
    pub interval: u32,
    #[serde(default)]
    pub sound_enabled: bool,
    #[serde(default = "default_selected_sound")]
    pub selected_sound: String,
}

fn default_selected_sound() -> String {
    NO_SOUND.to_string()
}

/// Partial update merged into an existing [`ReminderConfig`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderConfigUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub interval: Option<u32>,
    #[serde(default)]
    pub sound_enabled: Option<bool>,
    #[serde(default)]
    pub selected_sound: Option<String>,
}

impl ReminderConfigUpdate {
    pub fn enabled(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
            ..Self::default()
        }
    }

    pub fn interval(minutes: u32) -> Self {
        Self {
            interval: Some(minutes),
            ..Self::default()
        }
    }

    /// Whether the update requires the reminder's timer to be restarted
    pub fn affects_timer(&self) -> bool {
        self.interval.is_some() || self.enabled.is_some()
    }

    pub fn apply_to(&self, config: &mut ReminderConfig) {
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        if let Some(icon) = &self.icon {
            config.icon = icon.clone();
        }
        if let Some(enabled) = self.enabled {
            config.enabled = enabled;
        }
        if let Some(interval) = self.interval {
            config.interval = interval;
        }
        if let Some(sound_enabled) = self.sound_enabled {
            config.sound_enabled = sound_enabled;
        }
        if let Some(selected_sound) = &self.selected_sound {
            config.selected_sound = selected_sound.clone();
        }
    }
}

/// A user-authored reminder kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomReminderData {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    pub default_interval: u32,
    pub created_at: DateTime<Utc>,
}

/// Partial update for a custom reminder. Pools are replaced, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomReminderUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub messages: Option<Vec<String>>,
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
    #[serde(default)]
    pub default_interval: Option<u32>,
}

impl CustomReminderUpdate {
    pub fn apply_to(&self, data: &mut CustomReminderData) {
        if let Some(name) = &self.name {
            data.name = name.clone();
        }
        if let Some(icon) = &self.icon {
            data.icon = icon.clone();
        }
        if let Some(messages) = &self.messages {
            data.messages = messages.clone();
        }
        if let Some(instructions) = &self.instructions {
            data.instructions = instructions.clone();
        }
        if let Some(default_interval) = self.default_interval {
            data.default_interval = default_interval;
        }
    }
}

/// Everything the application persists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub reminders: BTreeMap<String, ReminderConfig>,
    #[serde(default)]
    pub custom_reminders: BTreeMap<String, CustomReminderData>,
    #[serde(default = "default_true")]
    pub global_sound_enabled: bool,
    #[serde(default)]
    pub start_at_login: bool,
    #[serde(default)]
    pub silent_mode: bool,
    /// Enabled flags captured when silent mode was entered
    #[serde(default)]
    pub silent_mode_original_states: BTreeMap<String, bool>,
}

fn default_true() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            reminders: BTreeMap::new(),
            custom_reminders: BTreeMap::new(),
            global_sound_enabled: true,
            start_at_login: false,
            silent_mode: false,
            silent_mode_original_states: BTreeMap::new(),
        }
    }
}

/// Durable key/value store for all reminder state
#[derive(Clone)]
pub struct SettingsStore {
    settings_path: PathBuf,
    settings: Arc<RwLock<AppSettings>>,
}

impl SettingsStore {
    /// Open the store in `app_data_dir`, creating default settings if needed
    pub async fn open(app_data_dir: &Path) -> Result<Self> {
        let settings_path = app_data_dir.join(SETTINGS_FILE_NAME);
        let settings = Self::load(&settings_path).await?;

        Ok(Self {
            settings_path,
            settings: Arc::new(RwLock::new(settings)),
        })
    }

    async fn load(settings_path: &Path) -> Result<AppSettings> {
        if !settings_path.exists() {
            tracing::info!("Settings file not found, creating default settings");
            let default = AppSettings::default();
            Self::write(settings_path, &default).await?;
            return Ok(default);
        }

        let content = fs::read_to_string(settings_path).await?;
        let settings: AppSettings = serde_json::from_str(&content)
            .map_err(|e| AppError::Generic(format!("Failed to parse settings: {}", e)))?;

        tracing::debug!(
            "Loaded settings with {} reminder configs and {} custom reminders",
            settings.reminders.len(),
            settings.custom_reminders.len()
        );
        Ok(settings)
    }

    async fn write(settings_path: &Path, settings: &AppSettings) -> Result<()> {
        if let Some(parent) = settings_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(settings)?;
        let tmp_path = settings_path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, settings_path).await?;
        tracing::debug!("Settings saved to {:?}", settings_path);

        Ok(())
    }

    /// Apply `mutate` to a copy of the settings, persist it if it reports a
    /// change, and only then make it the in-memory state. A failed write
    /// leaves both memory and disk unchanged.
    async fn update<T>(&self, mutate: impl FnOnce(&mut AppSettings) -> (T, bool)) -> Result<T> {
        let mut settings = self.settings.write().await;
        let mut next = settings.clone();
        let (value, changed) = mutate(&mut next);
        if changed {
            Self::write(&self.settings_path, &next).await?;
            *settings = next;
        }
        Ok(value)
    }

    pub fn path(&self) -> &Path {
        &self.settings_path
    }

    /// Copy of the full settings document
    pub async fn snapshot(&self) -> AppSettings {
        self.settings.read().await.clone()
    }

    // ===== Reminder configs =====

    pub async fn get_reminder_config(&self, id: &str) -> Option<ReminderConfig> {
        self.settings.read().await.reminders.get(id).cloned()
    }

    /// Merge `update` into an existing config. Unknown ids are left alone.
    pub async fn set_reminder_config(
        &self,
        id: &str,
        update: &ReminderConfigUpdate,
    ) -> Result<Option<ReminderConfig>> {
        self.update(|settings| match settings.reminders.get_mut(id) {
            Some(config) => {
                update.apply_to(config);
                (Some(config.clone()), true)
            }
            None => (None, false),
        })
        .await
    }

    pub async fn get_all_reminders(&self) -> BTreeMap<String, ReminderConfig> {
        self.settings.read().await.reminders.clone()
    }

    /// Store `config` unless one already exists for its id. Returns true if stored.
    pub async fn initialize_reminder(&self, config: ReminderConfig) -> Result<bool> {
        self.update(|settings| {
            if settings.reminders.contains_key(&config.id) {
                return (false, false);
            }
            settings.reminders.insert(config.id.clone(), config);
            (true, true)
        })
        .await
    }

    // ===== Global flags =====

    pub async fn get_silent_mode(&self) -> bool {
        self.settings.read().await.silent_mode
    }

    pub async fn set_silent_mode(&self, enabled: bool) -> Result<()> {
        self.update(|settings| {
            settings.silent_mode = enabled;
            ((), true)
        })
        .await
    }

    pub async fn get_silent_mode_original_states(&self) -> BTreeMap<String, bool> {
        self.settings.read().await.silent_mode_original_states.clone()
    }

    pub async fn set_silent_mode_original_states(&self, states: BTreeMap<String, bool>) -> Result<()> {
        self.update(|settings| {
            settings.silent_mode_original_states = states;
            ((), true)
        })
        .await
    }

    /// Leave silent mode, clearing the flag and the snapshot in one write
    pub async fn clear_silent_mode(&self) -> Result<()> {
        self.update(|settings| {
            settings.silent_mode = false;
            settings.silent_mode_original_states.clear();
            ((), true)
        })
        .await
    }

    pub async fn get_start_at_login(&self) -> bool {
        self.settings.read().await.start_at_login
    }

    pub async fn set_start_at_login(&self, enabled: bool) -> Result<()> {
        self.update(|settings| {
            settings.start_at_login = enabled;
            ((), true)
        })
        .await
    }

    pub async fn get_global_sound_enabled(&self) -> bool {
        self.settings.read().await.global_sound_enabled
    }

    pub async fn set_global_sound_enabled(&self, enabled: bool) -> Result<()> {
        self.update(|settings| {
            settings.global_sound_enabled = enabled;
            ((), true)
        })
        .await
    }

    // ===== Custom reminders =====

    pub async fn get_custom_reminders(&self) -> BTreeMap<String, CustomReminderData> {
        self.settings.read().await.custom_reminders.clone()
    }

    pub async fn get_custom_reminder(&self, id: &str) -> Option<CustomReminderData> {
        self.settings.read().await.custom_reminders.get(id).cloned()
    }

    pub async fn add_custom_reminder(&self, data: CustomReminderData) -> Result<()> {
        self.update(|settings| {
            settings.custom_reminders.insert(data.id.clone(), data);
            ((), true)
        })
        .await
    }

    /// Merge `update` into a stored custom reminder. Returns the merged record.
    pub async fn update_custom_reminder(
        &self,
        id: &str,
        update: &CustomReminderUpdate,
    ) -> Result<Option<CustomReminderData>> {
        self.update(|settings| match settings.custom_reminders.get_mut(id) {
            Some(data) => {
                update.apply_to(data);
                (Some(data.clone()), true)
            }
            None => (None, false),
        })
        .await
    }

    /// Remove a custom reminder together with its config
    pub async fn delete_custom_reminder(&self, id: &str) -> Result<bool> {
        self.update(|settings| {
            let removed_data = settings.custom_reminders.remove(id).is_some();
            let removed_config = settings.reminders.remove(id).is_some();
            settings.silent_mode_original_states.remove(id);
            let removed = removed_data || removed_config;
            (removed, removed)
        })
        .await
    }
}
