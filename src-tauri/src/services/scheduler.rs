//! Reminder scheduler
//!
//! Owns one periodic timer per enabled reminder and keeps those timers in
//! step with the persisted configuration. The settings store is the single
//! source of truth; the registry of reminder kinds and the timer handles
//! live only in memory.
//!
//! Silent mode is a two-state machine. Entering it records every
//! reminder's `enabled` flag and disables the enabled ones; leaving it
//! re-enables exactly the reminders that were enabled before.

use crate::config::{CUSTOM_REMINDER_DEFAULT_INTERVAL, NO_SOUND};
use crate::error::{AppError, Result};
use crate::reminders::{CustomReminder, ReminderKind};
use crate::services::notifications::NotificationManager;
use crate::services::settings::{
    CustomReminderData, CustomReminderUpdate, ReminderConfig, ReminderConfigUpdate, SettingsStore,
};
use chrono::Utc;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use uuid::Uuid;

/// Listener invoked after every configuration change
pub type ConfigChangeCallback = Box<dyn Fn() + Send + Sync>;

/// Input for a new user-defined reminder
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCustomReminder {
    pub name: String,
    pub messages: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    pub icon: String,
}

/// Reminder scheduler shared by the tray menu and the preferences commands
#[derive(Clone)]
pub struct ReminderScheduler {
    inner: Arc<SchedulerInner>,
}

struct SchedulerInner {
    store: SettingsStore,
    notifications: NotificationManager,
    /// Registered kinds in registration order
    reminders: RwLock<Vec<Arc<dyn ReminderKind>>>,
    timers: Mutex<HashMap<String, JoinHandle<()>>>,
    on_config_change: RwLock<Option<ConfigChangeCallback>>,
}

impl ReminderScheduler {
    pub fn new(store: SettingsStore, notifications: NotificationManager) -> Self {
        Self {
            inner: Arc::new(SchedulerInner {
                store,
                notifications,
                reminders: RwLock::new(Vec::new()),
                timers: Mutex::new(HashMap::new()),
                on_config_change: RwLock::new(None),
            }),
        }
    }

    pub fn store(&self) -> &SettingsStore {
        &self.inner.store
    }

    pub fn notifications(&self) -> &NotificationManager {
        &self.inner.notifications
    }

    /// Install the single config-change listener, replacing any previous one
    pub async fn set_on_config_change(&self, callback: ConfigChangeCallback) {
        *self.inner.on_config_change.write().await = Some(callback);
    }

    async fn notify_config_changed(&self) {
        if let Some(callback) = self.inner.on_config_change.read().await.as_ref() {
            callback();
        }
    }

    async fn find_reminder(&self, id: &str) -> Option<Arc<dyn ReminderKind>> {
        self.inner
            .reminders
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    // ===== Registration =====

    /// Add a kind to the registry and create its config if none exists yet.
    ///
    /// New configs start enabled. Custom reminders already have a disabled
    /// config from when they were added, so registering them keeps it.
    pub async fn register_reminder(&self, reminder: Arc<dyn ReminderKind>) -> Result<()> {
        let id = reminder.id().to_string();
        let config = ReminderConfig {
            id: id.clone(),
            name: reminder.name().to_string(),
            icon: reminder.icon().to_string(),
            enabled: true,
            interval: reminder.default_interval(),
            sound_enabled: false,
            selected_sound: reminder.default_sound().to_string(),
        };

        {
            let mut reminders = self.inner.reminders.write().await;
            match reminders.iter_mut().find(|r| r.id() == id) {
                Some(existing) => *existing = reminder,
                None => reminders.push(reminder),
            }
        }

        if self.inner.store.initialize_reminder(config).await? {
            tracing::info!("Initialized config for reminder {}", id);
        }

        tracing::debug!("Registered reminder {}", id);
        Ok(())
    }

    /// Register a kind for every persisted custom reminder
    pub async fn load_custom_reminders(&self) -> Result<usize> {
        let custom = self.inner.store.get_custom_reminders().await;

        for data in custom.values() {
            // Records written by older versions may lack a config.
            self.inner
                .store
                .initialize_reminder(custom_config(data))
                .await?;
            self.register_reminder(Arc::new(CustomReminder::new(data)))
                .await?;
        }

        tracing::info!("Loaded {} custom reminders", custom.len());
        Ok(custom.len())
    }

    // ===== Timers =====

    /// Start (or restart) the timer for `id` if it is registered and enabled,
    /// otherwise make sure none is running
    pub async fn start_reminder(&self, id: &str) {
        self.sync_timer(id).await;
    }

    /// Bring the timer for `id` in line with its stored config.
    ///
    /// The config is read while the timer table is locked, so whichever
    /// caller takes the lock last sees the latest persisted state and the
    /// table can never keep a timer for a disabled reminder.
    async fn sync_timer(&self, id: &str) {
        let mut timers = self.inner.timers.lock().await;

        let config = match self.find_reminder(id).await {
            Some(_) => self.inner.store.get_reminder_config(id).await,
            None => None,
        };
        let interval = config.filter(|c| c.enabled).and_then(|c| {
            if c.interval == 0 {
                tracing::warn!("Reminder {} has a zero interval, not starting it", id);
            }
            (c.interval > 0).then_some(c.interval)
        });
        let Some(interval) = interval else {
            if let Some(previous) = timers.remove(id) {
                previous.abort();
                tracing::info!("Stopped reminder {}", id);
            }
            return;
        };

        let handle = self.spawn_timer(id.to_string(), interval);
        if let Some(previous) = timers.insert(id.to_string(), handle) {
            previous.abort();
        }

        tracing::info!("Started reminder {} every {} minutes", id, interval);
    }

    fn spawn_timer(&self, id: String, interval_minutes: u32) -> JoinHandle<()> {
        let period = Duration::from_secs(u64::from(interval_minutes) * 60);
        let scheduler: Weak<SchedulerInner> = Arc::downgrade(&self.inner);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let Some(inner) = scheduler.upgrade() else {
                    break;
                };
                tracing::debug!("Timer fired for reminder {}", id);
                ReminderScheduler { inner }.trigger_reminder(&id).await;
            }
        })
    }

    /// Cancel the timer for `id`, if any
    pub async fn stop_reminder(&self, id: &str) {
        if let Some(handle) = self.inner.timers.lock().await.remove(id) {
            handle.abort();
            tracing::info!("Stopped reminder {}", id);
        }
    }

    /// Compose and dispatch one notification for `id`.
    ///
    /// Does nothing for unknown or disabled reminders, which covers a timer
    /// firing just after its reminder was disabled or deleted.
    pub async fn trigger_reminder(&self, id: &str) {
        let Some(reminder) = self.find_reminder(id).await else {
            return;
        };
        let Some(config) = self.inner.store.get_reminder_config(id).await else {
            return;
        };
        if !config.enabled {
            return;
        }

        let sound = if config.sound_enabled && self.inner.store.get_global_sound_enabled().await {
            Some(config.selected_sound.as_str())
        } else {
            None
        };

        let data = reminder.notification_data();
        tracing::debug!("Triggering reminder {} (sound: {:?})", id, sound);
        self.inner.notifications.show_reminder(&data, sound);
    }

    /// Start every registered reminder whose config is enabled
    pub async fn start_all_enabled_reminders(&self) {
        let configs = self.inner.store.get_all_reminders().await;
        for (id, config) in &configs {
            if config.enabled {
                self.start_reminder(id).await;
            }
        }
    }

    /// Cancel every active timer
    pub async fn stop_all_reminders(&self) {
        let mut timers = self.inner.timers.lock().await;
        let count = timers.len();
        for (_, handle) in timers.drain() {
            handle.abort();
        }
        tracing::info!("Stopped {} reminder timers", count);
    }

    pub async fn is_running(&self, id: &str) -> bool {
        self.inner.timers.lock().await.contains_key(id)
    }

    pub async fn running_count(&self) -> usize {
        self.inner.timers.lock().await.len()
    }

    // ===== Configuration =====

    pub async fn get_reminder_config(&self, id: &str) -> Option<ReminderConfig> {
        self.inner.store.get_reminder_config(id).await
    }

    pub async fn get_all_configs(&self) -> BTreeMap<String, ReminderConfig> {
        self.inner.store.get_all_reminders().await
    }

    pub async fn get_all_reminders(&self) -> Vec<Arc<dyn ReminderKind>> {
        self.inner.reminders.read().await.clone()
    }

    pub async fn get_custom_reminders(&self) -> BTreeMap<String, CustomReminderData> {
        self.inner.store.get_custom_reminders().await
    }

    /// Merge `update` into the config and restart or stop the timer as needed
    pub async fn update_reminder_config(&self, id: &str, update: ReminderConfigUpdate) -> Result<()> {
        self.apply_config_update(id, &update).await?;
        self.notify_config_changed().await;
        Ok(())
    }

    async fn apply_config_update(&self, id: &str, update: &ReminderConfigUpdate) -> Result<()> {
        let merged = self.inner.store.set_reminder_config(id, update).await?;
        if merged.is_none() {
            tracing::debug!("Ignoring config update for unknown reminder {}", id);
        }

        if update.affects_timer() {
            self.sync_timer(id).await;
        }

        Ok(())
    }

    // ===== Silent mode =====

    pub async fn is_silent_mode(&self) -> bool {
        self.inner.store.get_silent_mode().await
    }

    /// Enter or leave silent mode. Returns the new silent-mode state.
    pub async fn toggle_silent_mode(&self) -> Result<bool> {
        let store = &self.inner.store;
        let silent = if store.get_silent_mode().await {
            let original_states = store.get_silent_mode_original_states().await;
            for (id, was_enabled) in &original_states {
                if *was_enabled {
                    self.apply_config_update(id, &ReminderConfigUpdate::enabled(true))
                        .await?;
                }
            }

            store.clear_silent_mode().await?;
            let restored = original_states.values().filter(|enabled| **enabled).count();
            tracing::info!("Silent mode off, restored {} reminders", restored);
            false
        } else {
            // Entries left by an interrupted entry keep their recorded state.
            let mut original_states = store.get_silent_mode_original_states().await;
            for (id, config) in store.get_all_reminders().await {
                original_states.entry(id).or_insert(config.enabled);
            }

            // Persist the snapshot first so a crash cannot lose it.
            store
                .set_silent_mode_original_states(original_states.clone())
                .await?;
            for (id, was_enabled) in &original_states {
                if *was_enabled {
                    self.apply_config_update(id, &ReminderConfigUpdate::enabled(false))
                        .await?;
                }
            }

            store.set_silent_mode(true).await?;
            tracing::info!("Silent mode on");
            true
        };

        self.notify_config_changed().await;
        Ok(silent)
    }

    // ===== Custom reminders =====

    /// Create, persist and register a custom reminder. It starts disabled.
    pub async fn add_custom_reminder(&self, new: NewCustomReminder) -> Result<String> {
        let data = CustomReminderData {
            id: format!("custom_{}", Uuid::new_v4().simple()),
            name: new.name,
            icon: new.icon,
            messages: new.messages,
            instructions: new.instructions,
            default_interval: CUSTOM_REMINDER_DEFAULT_INTERVAL,
            created_at: Utc::now(),
        };
        let id = data.id.clone();

        self.inner.store.add_custom_reminder(data.clone()).await?;
        self.inner.store.initialize_reminder(custom_config(&data)).await?;
        self.register_reminder(Arc::new(CustomReminder::new(&data)))
            .await?;

        tracing::info!("Added custom reminder {} ({})", id, data.name);
        self.notify_config_changed().await;
        Ok(id)
    }

    /// Replace a custom reminder's definition and rebuild its kind
    pub async fn update_custom_reminder(&self, id: &str, update: CustomReminderUpdate) -> Result<()> {
        let data = self
            .inner
            .store
            .update_custom_reminder(id, &update)
            .await?
            .ok_or_else(|| AppError::ReminderNotFound(id.to_string()))?;

        if update.name.is_some() || update.icon.is_some() {
            let display = ReminderConfigUpdate {
                name: update.name.clone(),
                icon: update.icon.clone(),
                ..Default::default()
            };
            self.inner.store.set_reminder_config(id, &display).await?;
        }

        // Stop first so no tick can fire against the old kind.
        self.stop_reminder(id).await;
        self.register_reminder(Arc::new(CustomReminder::new(&data)))
            .await?;
        self.start_reminder(id).await;

        tracing::info!("Updated custom reminder {}", id);
        self.notify_config_changed().await;
        Ok(())
    }

    /// Stop, unregister and forget a custom reminder
    pub async fn delete_custom_reminder(&self, id: &str) -> Result<()> {
        if self.inner.store.get_custom_reminder(id).await.is_none() {
            return Err(AppError::ReminderNotFound(id.to_string()));
        }

        self.inner.reminders.write().await.retain(|r| r.id() != id);
        self.stop_reminder(id).await;
        self.inner.store.delete_custom_reminder(id).await?;

        tracing::info!("Deleted custom reminder {}", id);
        self.notify_config_changed().await;
        Ok(())
    }

    /// Stop every timer before the process exits
    pub async fn shutdown(&self) {
        self.stop_all_reminders().await;
        tracing::info!("Reminder scheduler shut down");
    }
}

fn custom_config(data: &CustomReminderData) -> ReminderConfig {
    ReminderConfig {
        id: data.id.clone(),
        name: data.name.clone(),
        icon: data.icon.clone(),
        enabled: false,
        interval: data.default_interval,
        sound_enabled: false,
        selected_sound: NO_SOUND.to_string(),
    }
}
