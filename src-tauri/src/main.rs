// MindfulBreak - wellness micro-break reminders in the menu bar
// Entry point and application setup

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use mindfulbreak::app::{self, AppState};
use mindfulbreak::commands;
use tauri::{Manager, RunEvent};
use tauri_plugin_autostart::MacosLauncher;
use tauri_plugin_global_shortcut::{Code, GlobalShortcutExt, Modifiers, Shortcut, ShortcutState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(target_os = "macos")]
const CMD_OR_CTRL: Modifiers = Modifiers::SUPER;
#[cfg(not(target_os = "macos"))]
const CMD_OR_CTRL: Modifiers = Modifiers::CONTROL;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mindfulbreak=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MindfulBreak");

    let preferences_shortcut = Shortcut::new(Some(CMD_OR_CTRL), Code::Comma);

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            tracing::info!("Second instance launched");
            if let Some(state) = app.try_state::<AppState>() {
                state.scheduler.notifications().show_already_running();
            }
        }))
        .plugin(tauri_plugin_notification::init())
        .plugin(tauri_plugin_autostart::init(MacosLauncher::LaunchAgent, None))
        .plugin(
            tauri_plugin_global_shortcut::Builder::new()
                .with_handler(move |app, shortcut, event| {
                    if shortcut == &preferences_shortcut && event.state() == ShortcutState::Pressed {
                        if let Err(e) = commands::open_preferences_window(app) {
                            tracing::warn!("Failed to open preferences: {}", e);
                        }
                    }
                })
                .build(),
        )
        .setup(move |app| {
            tracing::info!("Running app setup");
            app::setup(app)?;

            if let Err(e) = app.global_shortcut().register(preferences_shortcut) {
                tracing::warn!("Failed to register preferences shortcut: {}", e);
            }
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_settings,
            commands::update_reminder,
            commands::test_sound,
            commands::get_custom_reminders,
            commands::add_custom_reminder,
            commands::update_custom_reminder,
            commands::delete_custom_reminder,
            commands::toggle_silent_mode,
            commands::set_start_at_login,
            commands::set_global_sound_enabled,
            commands::open_preferences,
            commands::close_preferences,
        ])
        .build(tauri::generate_context!())?;

    app.run(|app, event| match event {
        // Closing the preferences window must not quit a menu-bar app
        RunEvent::ExitRequested { api, code, .. } if code.is_none() => {
            api.prevent_exit();
        }
        RunEvent::Exit => {
            if let Some(state) = app.try_state::<AppState>() {
                tauri::async_runtime::block_on(state.scheduler.shutdown());
            }
            tracing::info!("MindfulBreak exited");
        }
        _ => {}
    });

    Ok(())
}
