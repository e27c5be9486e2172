//! Integration tests for MindfulBreak
//!
//! These tests verify end-to-end functionality including:
//! - Startup registration and persistence across restarts
//! - Timer-driven notifications under simulated time
//! - Silent mode and custom reminder workflows

use mindfulbreak::error::{AppError, Result};
use mindfulbreak::reminders::builtin_reminders;
use mindfulbreak::services::{
    Notification, NotificationManager, NotificationSurface, ReminderConfigUpdate,
    ReminderScheduler, SettingsStore, SoundPlayer,
};
use mindfulbreak::services::scheduler::NewCustomReminder;
use mindfulbreak::validation;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

#[derive(Default)]
struct CollectingSurface {
    titles: Mutex<Vec<String>>,
}

impl CollectingSurface {
    fn titles(&self) -> Vec<String> {
        self.titles.lock().unwrap().clone()
    }
}

impl NotificationSurface for CollectingSurface {
    fn show(&self, notification: &Notification) -> Result<()> {
        self.titles.lock().unwrap().push(notification.title.clone());
        Ok(())
    }
}

#[derive(Default)]
struct CollectingSounds {
    played: Mutex<Vec<String>>,
}

impl SoundPlayer for CollectingSounds {
    fn play_sound(&self, name: &str) {
        self.played.lock().unwrap().push(name.to_string());
    }
}

/// Helper that mirrors application startup against a data directory
async fn start_app(
    data_dir: &Path,
) -> (ReminderScheduler, Arc<CollectingSurface>, Arc<CollectingSounds>) {
    let store = SettingsStore::open(data_dir).await.unwrap();
    let surface = Arc::new(CollectingSurface::default());
    let sounds = Arc::new(CollectingSounds::default());
    let notifications = NotificationManager::new(surface.clone(), sounds.clone());
    let scheduler = ReminderScheduler::new(store, notifications);

    for reminder in builtin_reminders() {
        scheduler.register_reminder(reminder).await.unwrap();
    }
    scheduler.load_custom_reminders().await.unwrap();
    scheduler.start_all_enabled_reminders().await;

    (scheduler, surface, sounds)
}

async fn advance_minutes(minutes: u64) {
    tokio::time::sleep(Duration::from_secs(minutes * 60 + 1)).await;
}

#[tokio::test(start_paused = true)]
async fn test_first_launch_runs_builtin_reminders() {
    let temp_dir = TempDir::new().unwrap();
    let (scheduler, surface, sounds) = start_app(temp_dir.path()).await;

    assert!(temp_dir.path().join("settings.json").exists());
    assert_eq!(scheduler.running_count().await, 3);

    // 30 min: breathing. 45: stretching. 60: breathing + water.
    advance_minutes(60).await;
    let titles = surface.titles();
    assert_eq!(titles.len(), 4);
    assert_eq!(
        titles.iter().filter(|t| *t == "🧘 Mindful Breathing Break").count(),
        2
    );
    assert!(titles.contains(&"💧 Hydration Break".to_string()));
    assert!(titles.contains(&"🤸‍♀️ Stretch Break".to_string()));

    // Sounds default to off.
    assert!(sounds.played.lock().unwrap().is_empty());
    scheduler.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_config_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    {
        let (scheduler, _, _) = start_app(temp_dir.path()).await;
        scheduler
            .update_reminder_config("breathing", ReminderConfigUpdate::interval(5))
            .await
            .unwrap();
        scheduler
            .update_reminder_config("water", ReminderConfigUpdate::enabled(false))
            .await
            .unwrap();
        scheduler
            .update_reminder_config("stretching", ReminderConfigUpdate::enabled(false))
            .await
            .unwrap();
        scheduler.shutdown().await;
    }

    let (scheduler, surface, _) = start_app(temp_dir.path()).await;
    assert_eq!(
        scheduler.get_reminder_config("breathing").await.unwrap().interval,
        5
    );
    assert!(!scheduler.is_running("water").await);

    advance_minutes(15).await;
    assert_eq!(surface.titles().len(), 3);
    scheduler.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_silent_mode_across_restart() {
    let temp_dir = TempDir::new().unwrap();

    {
        let (scheduler, _, _) = start_app(temp_dir.path()).await;
        scheduler
            .update_reminder_config("water", ReminderConfigUpdate::enabled(false))
            .await
            .unwrap();
        assert!(scheduler.toggle_silent_mode().await.unwrap());
        scheduler.shutdown().await;
    }

    let (scheduler, surface, _) = start_app(temp_dir.path()).await;
    assert!(scheduler.is_silent_mode().await);
    assert_eq!(scheduler.running_count().await, 0);

    advance_minutes(120).await;
    assert!(surface.titles().is_empty());

    assert!(!scheduler.toggle_silent_mode().await.unwrap());
    assert!(scheduler.is_running("breathing").await);
    assert!(scheduler.is_running("stretching").await);
    assert!(!scheduler.is_running("water").await);
    scheduler.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_custom_reminder_workflow() {
    let temp_dir = TempDir::new().unwrap();

    let id = {
        let (scheduler, _, _) = start_app(temp_dir.path()).await;
        let new = validation::normalize_new_custom(NewCustomReminder {
            name: " Posture ".to_string(),
            messages: vec!["Sit up straight".to_string(), "".to_string()],
            instructions: vec![],
            icon: "".to_string(),
        })
        .unwrap();

        let id = scheduler.add_custom_reminder(new).await.unwrap();
        assert!(!scheduler.is_running(&id).await);

        scheduler
            .update_reminder_config(&id, ReminderConfigUpdate::enabled(true))
            .await
            .unwrap();
        scheduler.shutdown().await;
        id
    };

    let (scheduler, surface, _) = start_app(temp_dir.path()).await;
    assert!(scheduler.is_running(&id).await);
    assert_eq!(scheduler.get_all_reminders().await.len(), 4);

    // Breathing and the custom reminder share the 30 minute interval.
    advance_minutes(30).await;
    assert!(surface.titles().contains(&"🔔 Posture Reminder".to_string()));

    scheduler.delete_custom_reminder(&id).await.unwrap();
    assert!(!scheduler.is_running(&id).await);
    scheduler.shutdown().await;

    let store = SettingsStore::open(temp_dir.path()).await.unwrap();
    assert!(store.get_custom_reminders().await.is_empty());
    assert!(store.get_reminder_config(&id).await.is_none());
}

#[tokio::test]
async fn test_sound_follows_reminder_and_global_switch() {
    let temp_dir = TempDir::new().unwrap();
    let (scheduler, _, sounds) = start_app(temp_dir.path()).await;

    let update = ReminderConfigUpdate {
        sound_enabled: Some(true),
        ..Default::default()
    };
    scheduler.update_reminder_config("stretching", update).await.unwrap();
    scheduler.trigger_reminder("stretching").await;
    assert_eq!(
        *sounds.played.lock().unwrap(),
        vec!["Spring Forest Nature Sound.mp3".to_string()]
    );

    scheduler.store().set_global_sound_enabled(false).await.unwrap();
    scheduler.trigger_reminder("stretching").await;
    assert_eq!(sounds.played.lock().unwrap().len(), 1);
    scheduler.shutdown().await;
}

#[tokio::test]
async fn test_corrupt_settings_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("settings.json"), "{ not json").unwrap();

    let result = SettingsStore::open(temp_dir.path()).await;
    assert!(matches!(result, Err(AppError::Generic(_))));
}

#[tokio::test]
async fn test_settings_file_layout() {
    let temp_dir = TempDir::new().unwrap();
    let (scheduler, _, _) = start_app(temp_dir.path()).await;
    scheduler.toggle_silent_mode().await.unwrap();
    scheduler.shutdown().await;

    let raw = std::fs::read_to_string(temp_dir.path().join("settings.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(json["reminders"]["water"]["interval"], 60);
    assert_eq!(json["reminders"]["water"]["enabled"], false);
    assert_eq!(json["silent_mode"], true);
    assert_eq!(json["silent_mode_original_states"]["water"], true);
    assert_eq!(json["global_sound_enabled"], true);
}
