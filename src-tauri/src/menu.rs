//! Tray menu model
//!
//! Everything the tray menu shows, computed from the scheduler, plus the
//! mapping from menu item ids back to actions. Rendering lives in the
//! desktop-only `tray` module.

use crate::error::Result;
use crate::reminders::{ReminderKind, BREATHING};
use crate::services::scheduler::ReminderScheduler;
use crate::services::settings::ReminderConfigUpdate;

pub const MENU_ID_STATUS: &str = "status";
pub const MENU_ID_REMINDER_PREFIX: &str = "reminder:";
pub const MENU_ID_TEST_NOTIFICATION: &str = "test_notification";
pub const MENU_ID_QUICK_EXERCISE: &str = "quick_exercise";
pub const MENU_ID_SILENT_MODE: &str = "silent_mode";
pub const MENU_ID_PREFERENCES: &str = "preferences";
pub const MENU_ID_START_AT_LOGIN: &str = "start_at_login";
pub const MENU_ID_QUIT: &str = "quit";

/// One reminder's check item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuReminder {
    pub id: String,
    pub label: String,
    pub enabled: bool,
}

impl MenuReminder {
    pub fn menu_id(&self) -> String {
        format!("{}{}", MENU_ID_REMINDER_PREFIX, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModel {
    pub status: String,
    /// In registration order
    pub reminders: Vec<MenuReminder>,
    pub silent_mode: bool,
    pub start_at_login: bool,
}

impl MenuModel {
    pub async fn load(scheduler: &ReminderScheduler) -> Self {
        let configs = scheduler.get_all_configs().await;

        let reminders: Vec<MenuReminder> = scheduler
            .get_all_reminders()
            .await
            .iter()
            .filter_map(|reminder| {
                let config = configs.get(reminder.id())?;
                Some(MenuReminder {
                    id: config.id.clone(),
                    label: format!("{} {}", config.icon, config.name),
                    enabled: config.enabled,
                })
            })
            .collect();

        let active = configs.values().filter(|c| c.enabled).count();

        Self {
            status: status_line(active),
            reminders,
            silent_mode: scheduler.is_silent_mode().await,
            start_at_login: scheduler.store().get_start_at_login().await,
        }
    }
}

pub fn status_line(active: usize) -> String {
    match active {
        0 => "😴 No Reminders Active".to_string(),
        1 => "🧘 1 Reminder Active".to_string(),
        n => format!("🧘 {} Reminders Active", n),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    ToggleReminder(String),
    TestNotification,
    QuickExercise,
    ToggleSilentMode,
    OpenPreferences,
    ToggleStartAtLogin,
    Quit,
}

impl MenuAction {
    pub fn from_id(id: &str) -> Option<Self> {
        if let Some(reminder_id) = id.strip_prefix(MENU_ID_REMINDER_PREFIX) {
            return Some(Self::ToggleReminder(reminder_id.to_string()));
        }

        match id {
            MENU_ID_TEST_NOTIFICATION => Some(Self::TestNotification),
            MENU_ID_QUICK_EXERCISE => Some(Self::QuickExercise),
            MENU_ID_SILENT_MODE => Some(Self::ToggleSilentMode),
            MENU_ID_PREFERENCES => Some(Self::OpenPreferences),
            MENU_ID_START_AT_LOGIN => Some(Self::ToggleStartAtLogin),
            MENU_ID_QUIT => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Reminder fired by "Test Notification": the first enabled one, else breathing
pub async fn test_notification_target(scheduler: &ReminderScheduler) -> String {
    let configs = scheduler.get_all_configs().await;
    scheduler
        .get_all_reminders()
        .await
        .iter()
        .find(|r| configs.get(r.id()).is_some_and(|c| c.enabled))
        .map(|r| r.id().to_string())
        .unwrap_or_else(|| BREATHING.id().to_string())
}

/// Sound for the quick exercise: the breathing reminder's selection, if audible
pub async fn quick_exercise_sound(scheduler: &ReminderScheduler) -> Option<String> {
    let config = scheduler.get_reminder_config(BREATHING.id()).await?;
    let global = scheduler.store().get_global_sound_enabled().await;
    (config.sound_enabled && global).then_some(config.selected_sound)
}

/// Show the quick exercise notification with the breathing reminder's sound
pub async fn run_quick_exercise(scheduler: &ReminderScheduler) {
    let sound = quick_exercise_sound(scheduler).await;
    scheduler
        .notifications()
        .show_quick_exercise(sound.as_deref());
}

/// Flip a reminder's enabled flag from its check item
pub async fn toggle_reminder(scheduler: &ReminderScheduler, id: &str) -> Result<()> {
    let Some(config) = scheduler.get_reminder_config(id).await else {
        return Ok(());
    };
    scheduler
        .update_reminder_config(id, ReminderConfigUpdate::enabled(!config.enabled))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminders::builtin_reminders;
    use crate::services::settings::SettingsStore;
    use crate::test_support::{recording_manager, RecordingSounds, RecordingSurface};
    use std::sync::Arc;
    use tempfile::TempDir;

    async fn create_test_scheduler() -> (
        ReminderScheduler,
        Arc<RecordingSurface>,
        Arc<RecordingSounds>,
        TempDir,
    ) {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::open(temp_dir.path()).await.unwrap();
        let (notifications, surface, sounds) = recording_manager(RecordingSurface::default());
        let scheduler = ReminderScheduler::new(store, notifications);
        for reminder in builtin_reminders() {
            scheduler.register_reminder(reminder).await.unwrap();
        }
        (scheduler, surface, sounds, temp_dir)
    }

    #[test]
    fn test_status_line() {
        assert_eq!(status_line(0), "😴 No Reminders Active");
        assert_eq!(status_line(1), "🧘 1 Reminder Active");
        assert_eq!(status_line(3), "🧘 3 Reminders Active");
    }

    #[test]
    fn test_action_from_id() {
        assert_eq!(
            MenuAction::from_id("reminder:water"),
            Some(MenuAction::ToggleReminder("water".to_string()))
        );
        assert_eq!(MenuAction::from_id(MENU_ID_QUIT), Some(MenuAction::Quit));
        assert_eq!(MenuAction::from_id(MENU_ID_STATUS), None);
        assert_eq!(MenuAction::from_id("unknown"), None);
    }

    #[tokio::test]
    async fn test_model_lists_reminders_in_registration_order() {
        let (scheduler, _, _, _temp) = create_test_scheduler().await;
        scheduler
            .update_reminder_config("water", ReminderConfigUpdate::enabled(false))
            .await
            .unwrap();

        let model = MenuModel::load(&scheduler).await;

        let ids: Vec<&str> = model.reminders.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["breathing", "water", "stretching"]);
        assert_eq!(model.reminders[0].label, "🧘 Breathing");
        assert_eq!(model.reminders[1].menu_id(), "reminder:water");
        assert!(!model.reminders[1].enabled);
        assert_eq!(model.status, "🧘 2 Reminders Active");
        assert!(!model.silent_mode);
        scheduler.shutdown().await;
    }

    #[tokio::test]
    async fn test_test_notification_target() {
        let (scheduler, _, _, _temp) = create_test_scheduler().await;
        scheduler
            .update_reminder_config("breathing", ReminderConfigUpdate::enabled(false))
            .await
            .unwrap();
        assert_eq!(test_notification_target(&scheduler).await, "water");

        scheduler.toggle_silent_mode().await.unwrap();
        assert_eq!(test_notification_target(&scheduler).await, "breathing");
        assert_eq!(MenuModel::load(&scheduler).await.status, "😴 No Reminders Active");
        scheduler.shutdown().await;
    }

    #[tokio::test]
    async fn test_quick_exercise_uses_breathing_sound_when_enabled() {
        let (scheduler, surface, sounds, _temp) = create_test_scheduler().await;

        run_quick_exercise(&scheduler).await;
        assert!(sounds.played().is_empty());

        let update = ReminderConfigUpdate {
            sound_enabled: Some(true),
            selected_sound: Some("Nature Sounds.mp3".to_string()),
            ..Default::default()
        };
        scheduler.update_reminder_config("breathing", update).await.unwrap();
        run_quick_exercise(&scheduler).await;

        assert_eq!(sounds.played(), vec!["Nature Sounds.mp3"]);
        assert_eq!(surface.count(), 2);
        scheduler.shutdown().await;
    }

    #[tokio::test]
    async fn test_toggle_reminder_flips_enabled() {
        let (scheduler, _, _, _temp) = create_test_scheduler().await;

        toggle_reminder(&scheduler, "stretching").await.unwrap();
        assert!(!scheduler.get_reminder_config("stretching").await.unwrap().enabled);
        assert!(!scheduler.is_running("stretching").await);

        toggle_reminder(&scheduler, "stretching").await.unwrap();
        assert!(scheduler.is_running("stretching").await);

        toggle_reminder(&scheduler, "missing").await.unwrap();
        scheduler.shutdown().await;
    }
}
