//! Window management commands
//!
//! The preferences window is the only window the app ever opens.

use crate::error::Result;
use tauri::webview::Color;
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder};

pub const PREFERENCES_WINDOW_LABEL: &str = "preferences";

/// Matches the preferences page background to avoid a white flash
const WINDOW_BACKGROUND_COLOR: Color = Color(245, 247, 246, 255);

/// Configuration for creating a new window
pub struct WindowConfig {
    pub label: String,
    pub url: &'static str,
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
}

/// Create a new window with the given configuration
/// Returns Ok(true) if a new window was created, Ok(false) if existing window was focused
pub fn create_or_focus_window(app: &tauri::AppHandle, config: WindowConfig) -> Result<bool> {
    if let Some(window) = app.get_webview_window(&config.label) {
        match window.is_visible() {
            Ok(_) => {
                tracing::debug!("Window already exists, focusing: {}", config.label);
                let _ = window.unminimize();
                let _ = window.show();
                let _ = window.set_focus();
                return Ok(false);
            }
            Err(_) => {
                tracing::debug!(
                    "Window exists but is invalid, will create new one: {}",
                    config.label
                );
            }
        }
    }

    tracing::debug!("Creating new window: {}", config.label);
    let window = WebviewWindowBuilder::new(app, &config.label, WebviewUrl::App(config.url.into()))
        .title(&config.title)
        .inner_size(config.width, config.height)
        .min_inner_size(config.min_width, config.min_height)
        .resizable(true)
        .center()
        .background_color(WINDOW_BACKGROUND_COLOR)
        .build()?;
    let _ = window.set_focus();

    tracing::info!("Window created successfully: {}", config.label);
    Ok(true)
}

/// Open the preferences window, or focus it if already open
pub fn open_preferences_window(app: &tauri::AppHandle) -> Result<bool> {
    tracing::info!("Opening preferences window");

    let config = WindowConfig {
        label: PREFERENCES_WINDOW_LABEL.to_string(),
        url: "index.html",
        title: "MindfulBreak Preferences".to_string(),
        width: 500.0,
        height: 680.0,
        min_width: 420.0,
        min_height: 480.0,
    };

    create_or_focus_window(app, config)
}

#[tauri::command]
pub fn open_preferences(app: tauri::AppHandle) -> Result<()> {
    open_preferences_window(&app)?;
    Ok(())
}

#[tauri::command]
pub fn close_preferences(app: tauri::AppHandle) -> Result<()> {
    if let Some(window) = app.get_webview_window(PREFERENCES_WINDOW_LABEL) {
        tracing::debug!("Closing preferences window");
        window.close()?;
    }
    Ok(())
}
