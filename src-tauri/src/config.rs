//! Application configuration constants
//!
//! Central location for reminder defaults, validation boundaries and the
//! bundled sound catalog used throughout the application.

// ===== Reminder Intervals =====

/// Interval assigned to newly created custom reminders, in minutes
pub const CUSTOM_REMINDER_DEFAULT_INTERVAL: u32 = 30;

/// Minimum reminder interval in minutes
pub const MIN_REMINDER_INTERVAL_MINUTES: u32 = 1;

/// Maximum reminder interval in minutes (one day)
pub const MAX_REMINDER_INTERVAL_MINUTES: u32 = 24 * 60;

// ===== Custom Reminder Limits =====

/// Maximum length of a custom reminder name
pub const MAX_REMINDER_NAME_LENGTH: usize = 60;

/// Maximum length of a single custom message or instruction line
pub const MAX_REMINDER_TEXT_LENGTH: usize = 500;

/// Icon used when a custom reminder is created without one
pub const DEFAULT_CUSTOM_ICON: &str = "🔔";

// ===== Sounds =====

/// Sentinel sound name meaning "play nothing"
pub const NO_SOUND: &str = "No Sound";

/// Selectable sounds, in display order. The sentinel always comes first.
pub const AVAILABLE_SOUNDS: &[&str] = &[
    NO_SOUND,
    "Spring Forest Nature Sound.mp3",
    "Nature Sounds.mp3",
    "Relaxing Ocean Sounds.mp3",
    "Relaxing Ocean Waves.mp3",
    "Chirping Sound Effect.mp3",
    "Chirping Sound Effects.mp3",
    "Chirping Bird Sound.mp3",
    "Chirping Sound Effects 2.mp3",
];

/// Directory (relative to the resource dir or the working dir) holding sound files
pub const SOUNDS_DIR_NAME: &str = "sounds";

// ===== Notifications =====

/// How long a reminder notification stays on screen, in seconds
pub const REMINDER_NOTIFICATION_TIMEOUT_SECS: u32 = 10;

/// Timeout for the startup notification
pub const APP_STARTED_NOTIFICATION_TIMEOUT_SECS: u32 = 5;

/// Timeout for the duplicate-instance notification
pub const ALREADY_RUNNING_NOTIFICATION_TIMEOUT_SECS: u32 = 3;

/// Timeout for the guided breathing exercise
pub const QUICK_EXERCISE_NOTIFICATION_TIMEOUT_SECS: u32 = 20;

/// Advisory actions offered on reminder notifications. They carry no callback.
pub const REMINDER_NOTIFICATION_ACTIONS: &[&str] = &["Start", "Skip"];

// ===== Persistence =====

/// File name of the persisted settings inside the app data directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";
