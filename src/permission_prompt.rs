use tauri::{AppHandle, Manager};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

use crate::{append_desktop_log, permission_bridge, SettingsState, MAIN_WINDOW_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PermissionPromptDecision {
    Prompt,
    AlreadyAnswered,
}

pub(crate) fn decide_permission_prompt(stored_choice: Option<bool>) -> PermissionPromptDecision {
    if stored_choice.is_some() {
        PermissionPromptDecision::AlreadyAnswered
    } else {
        PermissionPromptDecision::Prompt
    }
}

/// Asks the user whether the web app may send notifications and persists the
/// answer. Runs on a spawned task; the two-button dialog always yields an
/// explicit yes or no, so the stored choice never goes back to undecided.
pub(crate) fn prompt_notification_permission(app_handle: AppHandle) {
    tauri::async_runtime::spawn(async move {
        let allowed = app_handle
            .dialog()
            .message("Do you allow WhatsApp to send you notifications?")
            .title("Notification Request")
            .kind(MessageDialogKind::Info)
            .buttons(MessageDialogButtons::YesNo)
            .blocking_show();

        let settings = app_handle.state::<SettingsState>();
        if let Err(error) = settings.set_allow_permissions(allowed) {
            append_desktop_log(&format!(
                "failed to persist notification permission choice: {error}"
            ));
        }
        append_desktop_log(&format!(
            "notification permission {}",
            if allowed { "granted" } else { "denied" }
        ));

        // Apply the verdict to the page that triggered the prompt.
        if let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) {
            let script = permission_bridge::notification_bridge_script(allowed);
            if let Err(error) = window.eval(&script) {
                append_desktop_log(&format!(
                    "failed to apply notification permission to the page: {error}"
                ));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_prompt_runs_only_while_undecided() {
        assert_eq!(
            decide_permission_prompt(None),
            PermissionPromptDecision::Prompt
        );
        assert_eq!(
            decide_permission_prompt(Some(true)),
            PermissionPromptDecision::AlreadyAnswered
        );
        assert_eq!(
            decide_permission_prompt(Some(false)),
            PermissionPromptDecision::AlreadyAnswered
        );
    }
}
