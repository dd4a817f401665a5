#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod about_dialog;
mod app_constants;
mod app_runtime;
mod app_types;
mod download_policy;
mod logging;
mod menu_actions;
mod menu_handler;
mod menu_setup;
mod navigation_policy;
mod permission_bridge;
mod permission_prompt;
mod runtime_paths;
mod settings_store;
mod shell_locale;
mod tray_actions;
mod tray_labels;
mod tray_menu_handler;
mod tray_setup;
mod webview_setup;
mod window_actions;

pub(crate) use app_constants::*;
pub(crate) use app_types::{MenuHandles, ShellState, TrayMenuState, ZoomDirection};
pub(crate) use logging::{append_desktop_log, append_shutdown_log, append_startup_log};
pub(crate) use settings_store::SettingsState;

fn main() {
    app_runtime::run();
}
