//! Input validation for values coming from the preferences window
//!
//! The scheduler trusts its inputs; everything user-editable passes through
//! here first.

use crate::config::{
    DEFAULT_CUSTOM_ICON, MAX_REMINDER_INTERVAL_MINUTES, MAX_REMINDER_NAME_LENGTH,
    MAX_REMINDER_TEXT_LENGTH, MIN_REMINDER_INTERVAL_MINUTES,
};
use crate::error::{AppError, Result};
use crate::services::scheduler::NewCustomReminder;
use crate::services::settings::{CustomReminderUpdate, ReminderConfigUpdate};
use crate::services::sound::is_valid_sound;

pub fn validate_interval(minutes: u32) -> Result<u32> {
    if !(MIN_REMINDER_INTERVAL_MINUTES..=MAX_REMINDER_INTERVAL_MINUTES).contains(&minutes) {
        return Err(AppError::Validation(format!(
            "Interval must be between {} and {} minutes",
            MIN_REMINDER_INTERVAL_MINUTES, MAX_REMINDER_INTERVAL_MINUTES
        )));
    }
    Ok(minutes)
}

pub fn validate_sound(name: &str) -> Result<()> {
    if !is_valid_sound(name) {
        return Err(AppError::Validation(format!("Unknown sound: {}", name)));
    }
    Ok(())
}

/// Check the user-editable fields of a config update
pub fn validate_reminder_update(update: &ReminderConfigUpdate) -> Result<()> {
    if let Some(interval) = update.interval {
        validate_interval(interval)?;
    }
    if let Some(sound) = &update.selected_sound {
        validate_sound(sound)?;
    }
    Ok(())
}

fn normalize_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Reminder name cannot be empty".to_string()));
    }
    if name.chars().count() > MAX_REMINDER_NAME_LENGTH {
        return Err(AppError::Validation(format!(
            "Reminder name is limited to {} characters",
            MAX_REMINDER_NAME_LENGTH
        )));
    }
    Ok(name.to_string())
}

fn normalize_icon(icon: &str) -> String {
    match icon.trim() {
        "" => DEFAULT_CUSTOM_ICON.to_string(),
        icon => icon.to_string(),
    }
}

/// Trim every line and drop blank ones
fn normalize_lines(lines: &[String]) -> Result<Vec<String>> {
    let lines: Vec<String> = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if lines
        .iter()
        .any(|line| line.chars().count() > MAX_REMINDER_TEXT_LENGTH)
    {
        return Err(AppError::Validation(format!(
            "Messages are limited to {} characters",
            MAX_REMINDER_TEXT_LENGTH
        )));
    }
    Ok(lines)
}

fn normalize_messages(messages: &[String]) -> Result<Vec<String>> {
    let messages = normalize_lines(messages)?;
    if messages.is_empty() {
        return Err(AppError::Validation(
            "At least one message is required".to_string(),
        ));
    }
    Ok(messages)
}

/// Validate and normalize a new custom reminder
pub fn normalize_new_custom(new: NewCustomReminder) -> Result<NewCustomReminder> {
    Ok(NewCustomReminder {
        name: normalize_name(&new.name)?,
        messages: normalize_messages(&new.messages)?,
        instructions: normalize_lines(&new.instructions)?,
        icon: normalize_icon(&new.icon),
    })
}

/// Validate and normalize the fields present in a custom reminder update
pub fn normalize_custom_update(update: CustomReminderUpdate) -> Result<CustomReminderUpdate> {
    Ok(CustomReminderUpdate {
        name: update.name.as_deref().map(normalize_name).transpose()?,
        icon: update.icon.as_deref().map(normalize_icon),
        messages: update.messages.as_deref().map(normalize_messages).transpose()?,
        instructions: update
            .instructions
            .as_deref()
            .map(normalize_lines)
            .transpose()?,
        default_interval: update.default_interval.map(validate_interval).transpose()?,
    })
}
