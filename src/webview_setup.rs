use tauri::{
    webview::DownloadEvent, AppHandle, WebviewUrl, WebviewWindow, WebviewWindowBuilder,
};
use url::Url;

use crate::{
    append_desktop_log, download_policy, navigation_policy, APP_NAME, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_WIDTH, MAIN_WINDOW_LABEL, WEB_APP_URL,
};

/// Builds the main window on the fixed web app address and registers the
/// engine hooks: navigation policy and download destination handling.
pub(crate) fn build_main_window(app_handle: &AppHandle) -> Result<WebviewWindow, String> {
    let web_app_url = Url::parse(WEB_APP_URL)
        .map_err(|error| format!("Invalid web app URL {WEB_APP_URL}: {error}"))?;

    let builder = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::External(web_app_url),
    )
    .title(APP_NAME)
    .inner_size(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
    .on_navigation(|url| match navigation_policy::navigation_disposition(url) {
        navigation_policy::NavigationDisposition::AllowInApp => true,
        navigation_policy::NavigationDisposition::OpenExternally => {
            append_desktop_log(&format!(
                "opening external navigation in system browser: {url}"
            ));
            if let Err(error) = navigation_policy::open_in_system_browser(url.as_ref()) {
                append_desktop_log(&format!("failed to open external URL: {error}"));
            }
            false
        }
    })
    .on_download(|webview, event| {
        match event {
            DownloadEvent::Requested { url, destination } => {
                download_policy::handle_download_request(&webview, &url, destination);
            }
            DownloadEvent::Finished { url, success, .. } => {
                append_desktop_log(&format!(
                    "download finished (success={success}): {url}"
                ));
            }
            _ => {}
        }
        true
    });

    #[cfg(windows)]
    let builder = {
        let locale = crate::shell_locale::current_shell_locale();
        builder.additional_browser_args(&crate::shell_locale::browser_language_args(&locale))
    };

    builder
        .build()
        .map_err(|error| format!("Failed to create main window: {error}"))
}
