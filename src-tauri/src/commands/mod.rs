//! Tauri commands exposed to the preferences window
//!
//! This module organizes commands into logical submodules:
//! - `reminders`: Reminder configuration and custom reminder CRUD
//! - `settings`: Global flags, silent mode and sound preview
//! - `windows`: Preferences window management

pub mod reminders;
pub mod settings;
pub mod windows;

// Re-export all commands for convenient registration in main.rs
pub use reminders::*;
pub use settings::*;
pub use windows::*;
