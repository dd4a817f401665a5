use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

use crate::{APP_NAME, APP_WEBSITE};

pub(crate) fn about_text(app_name: &str, version: &str, website: &str) -> String {
    format!(
        "{app_name} {version}\n\nAn unofficial WhatsApp Web desktop application.\n\n{website}"
    )
}

pub(crate) fn show_about_dialog(app_handle: &AppHandle) {
    let version = app_handle.package_info().version.to_string();
    let text = about_text(APP_NAME, &version, APP_WEBSITE);

    let dialog_app_handle = app_handle.clone();
    tauri::async_runtime::spawn(async move {
        dialog_app_handle
            .dialog()
            .message(text)
            .title("About")
            .kind(MessageDialogKind::Info)
            .buttons(MessageDialogButtons::Ok)
            .blocking_show();
    });
}
