pub(crate) const MENU_REFRESH: &str = "menu_refresh";
pub(crate) const MENU_ZOOM_IN: &str = "menu_zoom_in";
pub(crate) const MENU_ZOOM_OUT: &str = "menu_zoom_out";
pub(crate) const MENU_FULLSCREEN: &str = "menu_fullscreen";
pub(crate) const MENU_CLOSE_TO_TRAY: &str = "menu_close_to_tray";
pub(crate) const MENU_ABOUT: &str = "menu_about";
pub(crate) const MENU_QUIT: &str = "menu_quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    Refresh,
    ZoomIn,
    ZoomOut,
    Fullscreen,
    CloseToTray,
    About,
    Quit,
}

pub(crate) fn action_from_menu_id(menu_id: &str) -> Option<MenuAction> {
    match menu_id {
        MENU_REFRESH => Some(MenuAction::Refresh),
        MENU_ZOOM_IN => Some(MenuAction::ZoomIn),
        MENU_ZOOM_OUT => Some(MenuAction::ZoomOut),
        MENU_FULLSCREEN => Some(MenuAction::Fullscreen),
        MENU_CLOSE_TO_TRAY => Some(MenuAction::CloseToTray),
        MENU_ABOUT => Some(MenuAction::About),
        MENU_QUIT => Some(MenuAction::Quit),
        _ => None,
    }
}
