use tauri::{AppHandle, Manager};

use crate::{tray_labels, MAIN_WINDOW_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CloseRequestedDecision {
    HideToTray,
    AllowClose,
}

/// Close-to-tray hides the window instead of closing it, unless the user has
/// already asked the shell to quit.
pub(crate) fn decide_close_requested(
    close_to_tray: bool,
    is_quitting: bool,
) -> CloseRequestedDecision {
    if close_to_tray && !is_quitting {
        CloseRequestedDecision::HideToTray
    } else {
        CloseRequestedDecision::AllowClose
    }
}

pub(crate) fn show_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("show_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
    tray_labels::update_tray_menu_labels_with_visibility(app_handle, Some(true), log);
}

pub(crate) fn hide_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("hide_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.hide() {
        log(&format!("failed to hide main window: {error}"));
    }
    tray_labels::update_tray_menu_labels_with_visibility(app_handle, Some(false), log);
}

pub(crate) fn toggle_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str) + Copy,
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("toggle_main_window skipped: main window not found");
        return;
    };

    match window.is_visible() {
        Ok(true) => hide_main_window(app_handle, log),
        Ok(false) => show_main_window(app_handle, log),
        Err(error) => log(&format!(
            "failed to read main window visibility in toggle_main_window: {error}"
        )),
    }
}

/// Reloads the page the webview currently shows; exactly one reload per call.
pub(crate) fn reload_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("reload_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.eval("window.location.reload();") {
        log(&format!("failed to reload main window: {error}"));
    } else {
        log("main window reloaded");
    }
}

#[cfg(test)]
mod tests {
    use super::{decide_close_requested, CloseRequestedDecision};

    #[test]
    fn close_request_hides_to_tray_when_the_setting_is_enabled() {
        assert_eq!(
            decide_close_requested(true, false),
            CloseRequestedDecision::HideToTray
        );
    }

    #[test]
    fn close_request_closes_when_the_setting_is_disabled() {
        assert_eq!(
            decide_close_requested(false, false),
            CloseRequestedDecision::AllowClose
        );
    }

    #[test]
    fn close_request_always_closes_while_quitting() {
        assert_eq!(
            decide_close_requested(true, true),
            CloseRequestedDecision::AllowClose
        );
        assert_eq!(
            decide_close_requested(false, true),
            CloseRequestedDecision::AllowClose
        );
    }
}
