//! Services module
//!
//! Business logic services shared by the tray menu and the preferences
//! commands.

pub mod notifications;
pub mod scheduler;
pub mod settings;
pub mod sound;

pub use notifications::{Notification, NotificationManager, NotificationSurface};
pub use scheduler::{NewCustomReminder, ReminderScheduler};
pub use settings::{
    AppSettings, CustomReminderData, CustomReminderUpdate, ReminderConfig, ReminderConfigUpdate,
    SettingsStore,
};
pub use sound::{SoundManager, SoundPlayer};
