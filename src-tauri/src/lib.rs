//! MindfulBreak library
//!
//! Reminder scheduling, persistence and notification dispatch for the
//! MindfulBreak menu-bar app. The desktop shell (tray, commands, windows)
//! is only compiled with the `desktop` feature.

#[cfg(feature = "desktop")]
pub mod app;
#[cfg(feature = "desktop")]
pub mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod reminders;
pub mod services;
#[cfg(feature = "desktop")]
pub mod tray;
pub mod validation;

#[cfg(test)]
mod test_support;
