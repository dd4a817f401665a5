use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log, append_shutdown_log, menu_actions, window_actions, MenuHandles,
    SettingsState, ShellState, ZoomDirection, MAIN_WINDOW_LABEL,
};

pub(crate) fn handle_menu_event(app_handle: &AppHandle, menu_id: &str) {
    match menu_actions::action_from_menu_id(menu_id) {
        Some(menu_actions::MenuAction::Refresh) => {
            window_actions::reload_main_window(app_handle, append_desktop_log)
        }
        Some(menu_actions::MenuAction::ZoomIn) => apply_zoom(app_handle, ZoomDirection::In),
        Some(menu_actions::MenuAction::ZoomOut) => apply_zoom(app_handle, ZoomDirection::Out),
        Some(menu_actions::MenuAction::Fullscreen) => toggle_fullscreen(app_handle),
        Some(menu_actions::MenuAction::CloseToTray) => persist_close_to_tray(app_handle),
        Some(menu_actions::MenuAction::About) => {
            crate::about_dialog::show_about_dialog(app_handle)
        }
        Some(menu_actions::MenuAction::Quit) => {
            let state = app_handle.state::<ShellState>();
            state.mark_quitting();
            append_shutdown_log("menu quit requested, exiting desktop process");
            app_handle.exit(0);
        }
        None => {}
    }
}

/// The toolkit owns the fullscreen state; read it fresh and request the
/// opposite, never a locally remembered value.
fn toggle_fullscreen(app_handle: &AppHandle) {
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        append_desktop_log("fullscreen toggle skipped: main window not found");
        return;
    };

    match window.is_fullscreen() {
        Ok(current) => {
            if let Err(error) = window.set_fullscreen(!current) {
                append_desktop_log(&format!("failed to toggle fullscreen: {error}"));
            }
        }
        Err(error) => {
            append_desktop_log(&format!("failed to read fullscreen state: {error}"));
        }
    }
}

fn apply_zoom(app_handle: &AppHandle, direction: ZoomDirection) {
    let state = app_handle.state::<ShellState>();
    let level = state.step_zoom(direction);

    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        append_desktop_log("zoom skipped: main window not found");
        return;
    };
    if let Err(error) = window.set_zoom(level) {
        append_desktop_log(&format!("failed to set zoom level {level}: {error}"));
    }
}

/// Persists the checkbox's own checked state; window visibility plays no part.
fn persist_close_to_tray(app_handle: &AppHandle) {
    let Some(menu_handles) = app_handle.try_state::<MenuHandles>() else {
        append_desktop_log("close-to-tray toggle skipped: menu handles not managed");
        return;
    };

    match menu_handles.close_to_tray_item.is_checked() {
        Ok(enabled) => {
            let settings = app_handle.state::<SettingsState>();
            match settings.set_close_to_tray(enabled) {
                Ok(()) => append_desktop_log(&format!(
                    "close to tray {}",
                    if enabled { "enabled" } else { "disabled" }
                )),
                Err(error) => append_desktop_log(&format!(
                    "failed to persist close-to-tray setting: {error}"
                )),
            }
        }
        Err(error) => {
            append_desktop_log(&format!("failed to read close-to-tray checkbox: {error}"));
        }
    }
}
