/// Script pinning the page's notification permission to the user's stored
/// choice. Evaluated in the main webview after each page load once a choice
/// exists, so `Notification.requestPermission` resolves without another
/// engine-level prompt.
pub(crate) fn notification_bridge_script(allowed: bool) -> String {
    let verdict = if allowed { "granted" } else { "denied" };
    format!(
        r#"(function () {{
  if (!('Notification' in window)) {{ return; }}
  try {{
    Object.defineProperty(Notification, 'permission', {{ get: function () {{ return '{verdict}'; }} }});
    Notification.requestPermission = function () {{ return Promise.resolve('{verdict}'); }};
  }} catch (e) {{ }}
}})();"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_script_grants_when_permission_was_allowed() {
        let script = notification_bridge_script(true);
        assert!(script.contains("'granted'"));
        assert!(!script.contains("'denied'"));
    }

    #[test]
    fn bridge_script_denies_when_permission_was_refused() {
        let script = notification_bridge_script(false);
        assert!(script.contains("'denied'"));
        assert!(!script.contains("'granted'"));
    }
}
