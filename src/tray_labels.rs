use tauri::{menu::MenuItem, AppHandle, Manager};

use crate::{tray_actions, TrayMenuState, MAIN_WINDOW_LABEL};

pub(crate) const TRAY_HIDE_LABEL: &str = "Hide ZapDesk";
pub(crate) const TRAY_SHOW_LABEL: &str = "Show ZapDesk";
pub(crate) const TRAY_QUIT_LABEL: &str = "Quit";

pub(crate) fn toggle_label_for_visibility(visible: bool) -> &'static str {
    if visible {
        TRAY_HIDE_LABEL
    } else {
        TRAY_SHOW_LABEL
    }
}

fn set_menu_text_safe<F>(item: &MenuItem<tauri::Wry>, text: &str, item_name: &str, log: F)
where
    F: Fn(&str),
{
    if let Err(error) = item.set_text(text) {
        log(&format!(
            "failed to update tray menu text for {}: {}",
            item_name, error
        ));
    }
}

pub(crate) fn update_tray_menu_labels<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    update_tray_menu_labels_with_visibility(app_handle, None, log);
}

pub(crate) fn update_tray_menu_labels_with_visibility<F>(
    app_handle: &AppHandle,
    visible_override: Option<bool>,
    log: F,
) where
    F: Fn(&str),
{
    let Some(tray_state) = app_handle.try_state::<TrayMenuState>() else {
        return;
    };

    let effective_visible = if let Some(visible) = visible_override {
        visible
    } else {
        app_handle
            .get_webview_window(MAIN_WINDOW_LABEL)
            .and_then(|window| window.is_visible().ok())
            .unwrap_or(true)
    };

    set_menu_text_safe(
        &tray_state.toggle_item,
        toggle_label_for_visibility(effective_visible),
        tray_actions::TRAY_MENU_TOGGLE_WINDOW,
        &log,
    );
    set_menu_text_safe(
        &tray_state.quit_item,
        TRAY_QUIT_LABEL,
        tray_actions::TRAY_MENU_QUIT,
        &log,
    );
}
