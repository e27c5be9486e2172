//! Tray icon and menu
//!
//! Renders [`MenuModel`] into a native menu and routes clicks to the
//! scheduler. The menu is rebuilt whenever the reminder configuration
//! changes.

use crate::app::{self, AppState};
use crate::commands::windows::open_preferences_window;
use crate::menu::{self, MenuAction, MenuModel};
use crate::menu::{
    MENU_ID_PREFERENCES, MENU_ID_QUICK_EXERCISE, MENU_ID_QUIT, MENU_ID_SILENT_MODE,
    MENU_ID_START_AT_LOGIN, MENU_ID_STATUS, MENU_ID_TEST_NOTIFICATION,
};
use tauri::menu::{CheckMenuItemBuilder, Menu, MenuBuilder, MenuItem};
use tauri::tray::TrayIconBuilder;
use tauri::{AppHandle, Manager, Wry};

const TRAY_ID: &str = "mindfulbreak";

fn build_menu(app: &AppHandle, model: &MenuModel) -> tauri::Result<Menu<Wry>> {
    let status = MenuItem::with_id(app, MENU_ID_STATUS, &model.status, false, None::<&str>)?;
    let mut menu = MenuBuilder::new(app).item(&status).separator();

    for reminder in &model.reminders {
        let item = CheckMenuItemBuilder::with_id(reminder.menu_id(), &reminder.label)
            .checked(reminder.enabled)
            .build(app)?;
        menu = menu.item(&item);
    }
    menu = menu.separator();

    let test = MenuItem::with_id(
        app,
        MENU_ID_TEST_NOTIFICATION,
        "📢 Test Notification",
        true,
        None::<&str>,
    )?;
    let exercise = MenuItem::with_id(
        app,
        MENU_ID_QUICK_EXERCISE,
        "🎯 Quick Breathing Exercise",
        true,
        None::<&str>,
    )?;
    let silent = CheckMenuItemBuilder::with_id(MENU_ID_SILENT_MODE, "🔕 Silent Mode")
        .checked(model.silent_mode)
        .build(app)?;
    menu = menu.item(&test).item(&exercise).item(&silent).separator();

    let preferences = MenuItem::with_id(
        app,
        MENU_ID_PREFERENCES,
        "⚙️ Preferences...",
        true,
        Some("CmdOrCtrl+,"),
    )?;
    let start_at_login = CheckMenuItemBuilder::with_id(MENU_ID_START_AT_LOGIN, "🚀 Start at Login")
        .checked(model.start_at_login)
        .build(app)?;
    let quit = MenuItem::with_id(app, MENU_ID_QUIT, "❌ Quit", true, None::<&str>)?;
    menu = menu
        .item(&preferences)
        .separator()
        .item(&start_at_login)
        .separator()
        .item(&quit);

    menu.build()
}

pub fn create_tray(app: &AppHandle, model: &MenuModel) -> tauri::Result<()> {
    let menu = build_menu(app, model)?;

    let icon_bytes = include_bytes!("../icons/32x32.png");
    let icon = tauri::image::Image::from_bytes(icon_bytes)?.to_owned();

    TrayIconBuilder::with_id(TRAY_ID)
        .icon(icon)
        .tooltip("MindfulBreak")
        .menu(&menu)
        .on_menu_event(|app, event| handle_menu_event(app, event.id().as_ref()))
        .build(app)?;

    tracing::debug!("Tray icon created");
    Ok(())
}

/// Rebuild the tray menu from the current scheduler state
pub fn refresh(app: &AppHandle) {
    let app = app.clone();
    tauri::async_runtime::spawn(async move {
        let Some(state) = app.try_state::<AppState>() else {
            return;
        };
        let model = MenuModel::load(&state.scheduler).await;

        let Some(tray) = app.tray_by_id(TRAY_ID) else {
            return;
        };
        let result = build_menu(&app, &model).and_then(|menu| tray.set_menu(Some(menu)));
        if let Err(e) = result {
            tracing::warn!("Failed to refresh tray menu: {}", e);
        }
    });
}

fn handle_menu_event(app: &AppHandle, id: &str) {
    let Some(action) = MenuAction::from_id(id) else {
        return;
    };
    let Some(state) = app.try_state::<AppState>() else {
        return;
    };
    let scheduler = state.scheduler.clone();
    tracing::debug!("Tray action: {:?}", action);

    if action == MenuAction::OpenPreferences {
        if let Err(e) = open_preferences_window(app) {
            tracing::warn!("Failed to open preferences: {}", e);
        }
        return;
    }

    let app = app.clone();
    tauri::async_runtime::spawn(async move {
        let result = match action {
            MenuAction::ToggleReminder(id) => menu::toggle_reminder(&scheduler, &id).await,
            MenuAction::TestNotification => {
                let id = menu::test_notification_target(&scheduler).await;
                scheduler.trigger_reminder(&id).await;
                Ok(())
            }
            MenuAction::QuickExercise => {
                menu::run_quick_exercise(&scheduler).await;
                Ok(())
            }
            MenuAction::ToggleSilentMode => scheduler.toggle_silent_mode().await.map(|_| ()),
            MenuAction::ToggleStartAtLogin => {
                let enabled = !scheduler.store().get_start_at_login().await;
                app::set_start_at_login(&app, enabled).await
            }
            MenuAction::Quit => {
                scheduler.stop_all_reminders().await;
                app.exit(0);
                Ok(())
            }
            MenuAction::OpenPreferences => Ok(()),
        };

        if let Err(e) = result {
            tracing::warn!("Tray action failed: {}", e);
            // Check items flip locally on click; put them back in sync.
            refresh(&app);
        }
    });
}
