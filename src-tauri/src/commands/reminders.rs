//! Reminder-related commands
//!
//! Configuration updates for every reminder plus CRUD for custom ones.

use crate::app::AppState;
use crate::error::Result;
use crate::services::{
    CustomReminderData, CustomReminderUpdate, NewCustomReminder, ReminderConfigUpdate,
};
use crate::validation;
use std::collections::BTreeMap;
use tauri::State;

/// Update one reminder's enabled flag, interval or sound
#[tauri::command]
pub async fn update_reminder(
    state: State<'_, AppState>,
    reminder_id: String,
    config: ReminderConfigUpdate,
) -> Result<()> {
    validation::validate_reminder_update(&config)?;

    // Display fields follow the reminder definition, not the window.
    let config = ReminderConfigUpdate {
        name: None,
        icon: None,
        ..config
    };

    tracing::info!("Updating reminder {}: {:?}", reminder_id, config);
    state
        .scheduler
        .update_reminder_config(&reminder_id, config)
        .await
}

#[tauri::command]
pub async fn get_custom_reminders(
    state: State<'_, AppState>,
) -> Result<BTreeMap<String, CustomReminderData>> {
    Ok(state.scheduler.get_custom_reminders().await)
}

/// Create a custom reminder and return its id
#[tauri::command]
pub async fn add_custom_reminder(
    state: State<'_, AppState>,
    reminder: NewCustomReminder,
) -> Result<String> {
    let reminder = validation::normalize_new_custom(reminder)?;
    state.scheduler.add_custom_reminder(reminder).await
}

#[tauri::command]
pub async fn update_custom_reminder(
    state: State<'_, AppState>,
    reminder_id: String,
    updates: CustomReminderUpdate,
) -> Result<()> {
    let updates = validation::normalize_custom_update(updates)?;
    state
        .scheduler
        .update_custom_reminder(&reminder_id, updates)
        .await
}

#[tauri::command]
pub async fn delete_custom_reminder(state: State<'_, AppState>, reminder_id: String) -> Result<()> {
    state.scheduler.delete_custom_reminder(&reminder_id).await
}
