//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState.

use crate::config::SOUNDS_DIR_NAME;
use crate::error::{AppError, Result};
use crate::menu::MenuModel;
use crate::reminders::builtin_reminders;
use crate::services::notifications::TauriNotificationSurface;
use crate::services::{NotificationManager, ReminderScheduler, SettingsStore, SoundManager};
use crate::tray;
use std::path::PathBuf;
use std::sync::Arc;
use tauri::{App, AppHandle, Manager};
use tauri_plugin_autostart::ManagerExt;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub app_data_dir: PathBuf,
    pub scheduler: ReminderScheduler,
}

impl AppState {
    pub fn new(app_data_dir: PathBuf, scheduler: ReminderScheduler) -> Self {
        Self {
            app_data_dir,
            scheduler,
        }
    }
}

/// Application setup - called once on startup
pub fn setup(app: &mut App) -> Result<()> {
    tracing::info!("Initializing application");

    // Menu-bar only: no dock icon
    #[cfg(target_os = "macos")]
    app.set_activation_policy(tauri::ActivationPolicy::Accessory);

    let app_data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| AppError::Generic(format!("Failed to get app data dir: {}", e)))?;

    tracing::info!("App data directory: {:?}", app_data_dir);
    std::fs::create_dir_all(&app_data_dir)?;

    let store = tauri::async_runtime::block_on(SettingsStore::open(&app_data_dir))?;

    let notifications = NotificationManager::new(
        Arc::new(TauriNotificationSurface::new(app.handle().clone())),
        Arc::new(SoundManager::new(sound_search_dirs(app.handle()))),
    );
    let scheduler = ReminderScheduler::new(store, notifications);

    tauri::async_runtime::block_on(register_reminders(&scheduler))?;

    let model = tauri::async_runtime::block_on(MenuModel::load(&scheduler));
    tray::create_tray(app.handle(), &model)?;

    let handle = app.handle().clone();
    let start_at_login = tauri::async_runtime::block_on(async {
        scheduler
            .set_on_config_change(Box::new(move || tray::refresh(&handle)))
            .await;
        scheduler.store().get_start_at_login().await
    });

    if let Err(e) = apply_start_at_login(app.handle(), start_at_login) {
        tracing::warn!("Failed to apply start-at-login setting: {}", e);
    }

    app.manage(AppState::new(app_data_dir, scheduler.clone()));

    tauri::async_runtime::block_on(scheduler.start_all_enabled_reminders());
    scheduler.notifications().show_app_started();

    tracing::info!("Application initialized successfully");

    Ok(())
}

async fn register_reminders(scheduler: &ReminderScheduler) -> Result<()> {
    for reminder in builtin_reminders() {
        scheduler.register_reminder(reminder).await?;
    }
    scheduler.load_custom_reminders().await?;
    Ok(())
}

/// Bundled resources first, then `./sounds` for running from the source tree
fn sound_search_dirs(app: &AppHandle) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    match app.path().resource_dir() {
        Ok(dir) => dirs.push(dir.join(SOUNDS_DIR_NAME)),
        Err(e) => tracing::warn!("No resource directory: {}", e),
    }
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.join(SOUNDS_DIR_NAME));
    }

    tracing::debug!("Sound search directories: {:?}", dirs);
    dirs
}

/// Register or unregister the OS login item
pub fn apply_start_at_login(app: &AppHandle, enabled: bool) -> Result<()> {
    let autolaunch = app.autolaunch();
    let result = if enabled {
        autolaunch.enable()
    } else {
        autolaunch.disable()
    };

    result.map_err(|e| AppError::Generic(format!("Failed to update login item: {}", e)))
}

/// Apply and persist the start-at-login flag, then refresh the tray
pub async fn set_start_at_login(app: &AppHandle, enabled: bool) -> Result<()> {
    let scheduler = app.state::<AppState>().scheduler.clone();

    apply_start_at_login(app, enabled)?;
    scheduler.store().set_start_at_login(enabled).await?;

    tracing::info!("Start at login set to {}", enabled);
    tray::refresh(app);
    Ok(())
}
