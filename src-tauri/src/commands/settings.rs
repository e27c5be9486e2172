//! Settings-related commands
//!
//! Commands for the preferences window's global controls: silent mode,
//! start at login, the global sound switch and sound preview.

use crate::app::{self, AppState};
use crate::error::Result;
use crate::services::sound::available_sounds;
use crate::services::{CustomReminderData, ReminderConfig};
use crate::validation;
use serde::Serialize;
use std::collections::BTreeMap;
use tauri::State;

/// Everything the preferences window renders
#[derive(Debug, Serialize)]
pub struct SettingsView {
    pub reminders: BTreeMap<String, ReminderConfig>,
    pub available_sounds: Vec<String>,
    pub custom_reminders: BTreeMap<String, CustomReminderData>,
    pub silent_mode: bool,
    pub global_sound_enabled: bool,
    pub start_at_login: bool,
}

#[tauri::command]
pub async fn get_settings(state: State<'_, AppState>) -> Result<SettingsView> {
    let settings = state.scheduler.store().snapshot().await;

    Ok(SettingsView {
        reminders: settings.reminders,
        available_sounds: available_sounds(),
        custom_reminders: settings.custom_reminders,
        silent_mode: settings.silent_mode,
        global_sound_enabled: settings.global_sound_enabled,
        start_at_login: settings.start_at_login,
    })
}

/// Toggle silent mode and return the new state
#[tauri::command]
pub async fn toggle_silent_mode(state: State<'_, AppState>) -> Result<bool> {
    state.scheduler.toggle_silent_mode().await
}

#[tauri::command]
pub async fn set_start_at_login(app: tauri::AppHandle, enabled: bool) -> Result<()> {
    app::set_start_at_login(&app, enabled).await
}

#[tauri::command]
pub async fn set_global_sound_enabled(state: State<'_, AppState>, enabled: bool) -> Result<()> {
    tracing::info!("Global sound set to {}", enabled);
    state.scheduler.store().set_global_sound_enabled(enabled).await
}

/// Preview a sound from the catalog
#[tauri::command]
pub async fn test_sound(state: State<'_, AppState>, sound_name: String) -> Result<()> {
    validation::validate_sound(&sound_name)?;
    state.scheduler.notifications().play_sound(&sound_name);
    Ok(())
}
