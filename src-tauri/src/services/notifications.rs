//! Notification dispatcher
//!
//! Turns reminder content into a native notification plus an optional
//! sound. Both are best-effort side effects: failures are logged here and
//! never reach the scheduler, and one failing never suppresses the other.

use crate::config::{
    ALREADY_RUNNING_NOTIFICATION_TIMEOUT_SECS, APP_STARTED_NOTIFICATION_TIMEOUT_SECS, NO_SOUND,
    QUICK_EXERCISE_NOTIFICATION_TIMEOUT_SECS, REMINDER_NOTIFICATION_ACTIONS,
    REMINDER_NOTIFICATION_TIMEOUT_SECS,
};
use crate::error::Result;
use crate::reminders::ReminderMessage;
use crate::services::sound::SoundPlayer;
use std::sync::Arc;

/// A notification as handed to the OS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    /// Advisory action labels. Platforms may ignore them.
    pub actions: Vec<String>,
    pub timeout_secs: u32,
}

/// Something that can put a notification on screen
pub trait NotificationSurface: Send + Sync {
    fn show(&self, notification: &Notification) -> Result<()>;
}

/// Dispatches reminder notifications and their sounds
#[derive(Clone)]
pub struct NotificationManager {
    surface: Arc<dyn NotificationSurface>,
    sounds: Arc<dyn SoundPlayer>,
}

impl NotificationManager {
    pub fn new(surface: Arc<dyn NotificationSurface>, sounds: Arc<dyn SoundPlayer>) -> Self {
        Self { surface, sounds }
    }

    /// Show a reminder, playing `sound_name` first if one is given
    pub fn show_reminder(&self, data: &ReminderMessage, sound_name: Option<&str>) {
        self.play(sound_name);

        self.display(Notification {
            title: data.title.clone(),
            body: format!("{}\n\n{}", data.message, data.instruction),
            actions: REMINDER_NOTIFICATION_ACTIONS
                .iter()
                .map(|a| a.to_string())
                .collect(),
            timeout_secs: REMINDER_NOTIFICATION_TIMEOUT_SECS,
        });
    }

    pub fn show_app_started(&self) {
        self.display(Notification {
            title: "🧘 Mindful Breathing Reminder Started".to_string(),
            body: "Your breathing reminders are now active!\n\n\
                   Default: every 30 minutes\n\
                   Click the menu bar icon to customize."
                .to_string(),
            actions: Vec::new(),
            timeout_secs: APP_STARTED_NOTIFICATION_TIMEOUT_SECS,
        });
    }

    pub fn show_already_running(&self) {
        self.display(Notification {
            title: "🧘 Mindful Breathing".to_string(),
            body: "App is already running in the menu bar!".to_string(),
            actions: Vec::new(),
            timeout_secs: ALREADY_RUNNING_NOTIFICATION_TIMEOUT_SECS,
        });
    }

    /// Guided box-breathing walkthrough offered from the tray menu
    pub fn show_quick_exercise(&self, sound_name: Option<&str>) {
        self.play(sound_name);

        self.display(Notification {
            title: "🧘 Quick Breathing Exercise".to_string(),
            body: "Let's do it together!\n\n\
                   1. Inhale slowly (4 seconds)\n\
                   2. Hold (4 seconds)\n\
                   3. Exhale slowly (4 seconds)\n\
                   4. Repeat 3 times\n\n\
                   You've got this! 💪"
                .to_string(),
            actions: Vec::new(),
            timeout_secs: QUICK_EXERCISE_NOTIFICATION_TIMEOUT_SECS,
        });
    }

    /// Play a sound on its own, e.g. to preview a selection
    pub fn play_sound(&self, sound_name: &str) {
        self.play(Some(sound_name));
    }

    fn play(&self, sound_name: Option<&str>) {
        match sound_name {
            Some(name) if name != NO_SOUND => self.sounds.play_sound(name),
            _ => {}
        }
    }

    fn display(&self, notification: Notification) {
        match self.surface.show(&notification) {
            Ok(()) => tracing::debug!("Notification shown: {}", notification.title),
            Err(e) => tracing::warn!("Failed to show notification {:?}: {}", notification.title, e),
        }
    }
}

/// Native notifications through the Tauri notification plugin
#[cfg(feature = "desktop")]
pub struct TauriNotificationSurface {
    app: tauri::AppHandle,
}

#[cfg(feature = "desktop")]
impl TauriNotificationSurface {
    pub fn new(app: tauri::AppHandle) -> Self {
        Self { app }
    }
}

#[cfg(feature = "desktop")]
impl NotificationSurface for TauriNotificationSurface {
    fn show(&self, notification: &Notification) -> Result<()> {
        use tauri_plugin_notification::NotificationExt;

        // Desktop notifications expire on the OS schedule; actions are advisory only.
        self.app
            .notification()
            .builder()
            .title(&notification.title)
            .body(&notification.body)
            .show()
            .map_err(|e| crate::error::AppError::Notification(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{recording_manager, RecordingSurface};

    fn message() -> ReminderMessage {
        ReminderMessage {
            title: "💧 Hydration Break".to_string(),
            message: "Time to hydrate!".to_string(),
            instruction: "Drink a full glass".to_string(),
        }
    }

    #[test]
    fn test_show_reminder_composes_body_and_plays_sound() {
        let (manager, surface, sounds) = recording_manager(RecordingSurface::default());

        manager.show_reminder(&message(), Some("Nature Sounds.mp3"));

        let shown = surface.shown.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "💧 Hydration Break");
        assert_eq!(shown[0].body, "Time to hydrate!\n\nDrink a full glass");
        assert_eq!(shown[0].actions, vec!["Start", "Skip"]);
        assert_eq!(shown[0].timeout_secs, 10);
        assert_eq!(sounds.played(), vec!["Nature Sounds.mp3"]);
    }

    #[test]
    fn test_no_sound_sentinel_and_none_are_silent() {
        let (manager, surface, sounds) = recording_manager(RecordingSurface::default());

        manager.show_reminder(&message(), None);
        manager.show_reminder(&message(), Some(NO_SOUND));

        assert_eq!(surface.count(), 2);
        assert!(sounds.played().is_empty());
    }

    #[test]
    fn test_display_failure_is_swallowed_and_sound_still_plays() {
        let (manager, surface, sounds) = recording_manager(RecordingSurface::failing());

        manager.show_reminder(&message(), Some("Nature Sounds.mp3"));

        assert_eq!(surface.count(), 1);
        assert_eq!(sounds.played().len(), 1);
    }

    #[test]
    fn test_informational_notifications_have_no_sound() {
        let (manager, surface, sounds) = recording_manager(RecordingSurface::default());

        manager.show_app_started();
        manager.show_already_running();

        let shown = surface.shown.lock().unwrap();
        assert_eq!(shown[0].timeout_secs, 5);
        assert_eq!(shown[1].body, "App is already running in the menu bar!");
        assert_eq!(shown[1].timeout_secs, 3);
        assert!(sounds.played().is_empty());
    }

    #[test]
    fn test_quick_exercise() {
        let (manager, surface, sounds) = recording_manager(RecordingSurface::default());

        manager.show_quick_exercise(Some("Chirping Bird Sound.mp3"));

        let shown = surface.shown.lock().unwrap();
        assert_eq!(shown[0].title, "🧘 Quick Breathing Exercise");
        assert!(shown[0].body.contains("Repeat 3 times"));
        assert_eq!(shown[0].timeout_secs, 20);
        assert_eq!(sounds.played(), vec!["Chirping Bird Sound.mp3"]);
    }
}
