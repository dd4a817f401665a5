pub(crate) const APP_NAME: &str = "ZapDesk";
pub(crate) const WEB_APP_URL: &str = "https://web.whatsapp.com/";
pub(crate) const APP_WEBSITE: &str = "https://github.com/zapdesk/zapdesk";

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const TRAY_ID: &str = "zapdesk-tray";

pub(crate) const DEFAULT_WINDOW_WIDTH: f64 = 1280.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f64 = 720.0;

pub(crate) const ROOT_DIR_ENV: &str = "ZAPDESK_ROOT";
pub(crate) const DESKTOP_STATE_FILE: &str = "desktop_state.json";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";

pub(crate) const DEFAULT_SHELL_LOCALE: &str = "en-US";

pub(crate) const DEFAULT_ZOOM_LEVEL: f64 = 1.0;
pub(crate) const ZOOM_STEP: f64 = 0.1;
pub(crate) const MIN_ZOOM_LEVEL: f64 = 0.5;
pub(crate) const MAX_ZOOM_LEVEL: f64 = 3.0;
