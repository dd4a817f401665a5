use tauri::{
    menu::{CheckMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu},
    AppHandle, Manager,
};

use crate::{append_desktop_log, menu_actions, MenuHandles, SettingsState, APP_NAME};

/// Builds the application menu mirroring the original header menu: refresh,
/// zoom, fullscreen, the close-to-tray checkbox, about, quit.
pub(crate) fn setup_menu(app_handle: &AppHandle) -> Result<(), String> {
    let close_to_tray = app_handle.state::<SettingsState>().snapshot().close_to_tray;

    let refresh_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_REFRESH,
        "Refresh",
        true,
        Some("CmdOrCtrl+R"),
    )
    .map_err(|error| format!("Failed to create refresh menu item: {error}"))?;
    let zoom_in_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_ZOOM_IN,
        "Zoom In",
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create zoom-in menu item: {error}"))?;
    let zoom_out_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_ZOOM_OUT,
        "Zoom Out",
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create zoom-out menu item: {error}"))?;
    let fullscreen_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_FULLSCREEN,
        "Fullscreen",
        true,
        Some("F11"),
    )
    .map_err(|error| format!("Failed to create fullscreen menu item: {error}"))?;
    let close_to_tray_item = CheckMenuItem::with_id(
        app_handle,
        menu_actions::MENU_CLOSE_TO_TRAY,
        "Close to Tray",
        true,
        close_to_tray,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create close-to-tray menu item: {error}"))?;
    let about_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_ABOUT,
        "About",
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create about menu item: {error}"))?;
    let quit_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_QUIT,
        "Quit",
        true,
        Some("CmdOrCtrl+Q"),
    )
    .map_err(|error| format!("Failed to create quit menu item: {error}"))?;
    let view_separator = PredefinedMenuItem::separator(app_handle)
        .map_err(|error| format!("Failed to create menu separator: {error}"))?;
    let quit_separator = PredefinedMenuItem::separator(app_handle)
        .map_err(|error| format!("Failed to create menu separator: {error}"))?;

    let app_submenu = Submenu::with_items(
        app_handle,
        APP_NAME,
        true,
        &[
            &refresh_item,
            &zoom_in_item,
            &zoom_out_item,
            &fullscreen_item,
            &view_separator,
            &close_to_tray_item,
            &about_item,
            &quit_separator,
            &quit_item,
        ],
    )
    .map_err(|error| format!("Failed to build app submenu: {error}"))?;
    let menu = Menu::with_items(app_handle, &[&app_submenu])
        .map_err(|error| format!("Failed to build app menu: {error}"))?;

    app_handle
        .set_menu(menu)
        .map_err(|error| format!("Failed to install app menu: {error}"))?;

    if !app_handle.manage(MenuHandles {
        close_to_tray_item: close_to_tray_item.clone(),
    }) {
        append_desktop_log("menu handles already exist, skipping manage");
    }

    Ok(())
}
