//! Reminder catalog
//!
//! A reminder kind knows its identity, its default cadence and sound, and
//! how to compose the text of one notification. Built-in kinds carry fixed
//! message pools; custom kinds carry pools written by the user.

mod builtin;
mod custom;
mod data;

pub use builtin::{builtin_reminders, BuiltinReminder, BREATHING, STRETCHING, WATER};
pub use custom::CustomReminder;

use rand::seq::SliceRandom;
use serde::Serialize;

/// Content of a single reminder notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderMessage {
    pub title: String,
    pub message: String,
    pub instruction: String,
}

/// Capabilities shared by every reminder kind
pub trait ReminderKind: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn icon(&self) -> &str;
    /// Interval in minutes used when the kind is first registered
    fn default_interval(&self) -> u32;
    fn default_sound(&self) -> &str;

    fn random_message(&self) -> String;
    fn instruction(&self) -> String;
    fn notification_data(&self) -> ReminderMessage;
}

/// Pick one entry uniformly at random, or fall back when the pool is empty.
pub(crate) fn pick_or<S: AsRef<str>>(pool: &[S], fallback: impl FnOnce() -> String) -> String {
    pool.choose(&mut rand::thread_rng())
        .map(|entry| entry.as_ref().to_string())
        .unwrap_or_else(fallback)
}

pub(crate) fn fallback_message(name: &str) -> String {
    format!("Time for your {} reminder! 🔔", name)
}

pub(crate) fn fallback_instruction(name: &str) -> String {
    format!("Take a moment to focus on {} 🎯", name.to_lowercase())
}
