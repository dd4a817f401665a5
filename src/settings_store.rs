use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use serde::{Deserialize, Serialize};

use crate::DESKTOP_STATE_FILE;

/// Persisted shell settings. `allow_permissions` stays `None` until the user
/// has answered the notification prompt once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ShellSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) allow_permissions: Option<bool>,
    pub(crate) close_to_tray: bool,
}

pub(crate) fn desktop_state_path(root_dir: Option<&Path>) -> Option<PathBuf> {
    root_dir.map(|root| root.join("data").join(DESKTOP_STATE_FILE))
}

pub(crate) fn load_shell_settings<F>(root_dir: Option<&Path>, log: F) -> ShellSettings
where
    F: Fn(&str),
{
    let Some(state_path) = desktop_state_path(root_dir) else {
        log("shell settings path is unavailable; using default settings");
        return ShellSettings::default();
    };

    let raw = match fs::read_to_string(&state_path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return ShellSettings::default();
        }
        Err(error) => {
            log(&format!(
                "failed to read shell settings {}: {}. using default settings",
                state_path.display(),
                error
            ));
            return ShellSettings::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(settings) => settings,
        Err(error) => {
            log(&format!(
                "failed to parse shell settings {}: {}. using default settings",
                state_path.display(),
                error
            ));
            ShellSettings::default()
        }
    }
}

pub(crate) fn save_shell_settings(
    root_dir: Option<&Path>,
    settings: &ShellSettings,
) -> Result<(), String> {
    let Some(state_path) = desktop_state_path(root_dir) else {
        return Err("Shell settings path is unavailable; cannot persist settings.".to_string());
    };

    if let Some(parent_dir) = state_path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create shell settings directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let serialized = serde_json::to_string_pretty(settings)
        .map_err(|error| format!("Failed to serialize shell settings: {error}"))?;
    fs::write(&state_path, serialized).map_err(|error| {
        format!(
            "Failed to write shell settings {}: {}",
            state_path.display(),
            error
        )
    })
}

/// Managed settings state. Mutations persist to disk immediately; a write
/// failure keeps the in-memory value and surfaces the error to the caller.
#[derive(Debug)]
pub(crate) struct SettingsState {
    root_dir: Option<PathBuf>,
    settings: Mutex<ShellSettings>,
}

impl SettingsState {
    pub(crate) fn load<F>(root_dir: Option<PathBuf>, log: F) -> Self
    where
        F: Fn(&str),
    {
        let settings = load_shell_settings(root_dir.as_deref(), log);
        Self {
            root_dir,
            settings: Mutex::new(settings),
        }
    }

    pub(crate) fn snapshot(&self) -> ShellSettings {
        self.settings
            .lock()
            .map(|guard| *guard)
            .unwrap_or_default()
    }

    pub(crate) fn set_allow_permissions(&self, allowed: bool) -> Result<(), String> {
        self.update(|settings| settings.allow_permissions = Some(allowed))
    }

    pub(crate) fn set_close_to_tray(&self, enabled: bool) -> Result<(), String> {
        self.update(|settings| settings.close_to_tray = enabled)
    }

    fn update<F>(&self, apply: F) -> Result<(), String>
    where
        F: FnOnce(&mut ShellSettings),
    {
        let updated = {
            let mut guard = self
                .settings
                .lock()
                .map_err(|_| "Shell settings lock poisoned.".to_string())?;
            apply(&mut guard);
            *guard
        };
        save_shell_settings(self.root_dir.as_deref(), &updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_log(_: &str) {}

    #[test]
    fn load_returns_defaults_when_state_file_is_missing() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        let settings = load_shell_settings(Some(temp_dir.path()), no_log);
        assert_eq!(settings, ShellSettings::default());
        assert_eq!(settings.allow_permissions, None);
        assert!(!settings.close_to_tray);
    }

    #[test]
    fn load_returns_defaults_when_state_file_is_malformed() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        let state_path = desktop_state_path(Some(temp_dir.path())).expect("state path");
        fs::create_dir_all(state_path.parent().expect("parent")).expect("create data dir");
        fs::write(&state_path, "not json").expect("write state");

        let settings = load_shell_settings(Some(temp_dir.path()), no_log);
        assert_eq!(settings, ShellSettings::default());
    }

    #[test]
    fn settings_round_trip_through_save_and_load() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        let settings = ShellSettings {
            allow_permissions: Some(true),
            close_to_tray: true,
        };

        save_shell_settings(Some(temp_dir.path()), &settings).expect("save settings");
        let loaded = load_shell_settings(Some(temp_dir.path()), no_log);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn unanswered_permission_choice_is_not_serialized() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        let settings = ShellSettings {
            allow_permissions: None,
            close_to_tray: true,
        };

        save_shell_settings(Some(temp_dir.path()), &settings).expect("save settings");
        let state_path = desktop_state_path(Some(temp_dir.path())).expect("state path");
        let raw = fs::read_to_string(state_path).expect("read state");
        assert!(!raw.contains("allowPermissions"));
        assert!(raw.contains("closeToTray"));
    }

    #[test]
    fn settings_state_mutations_persist_immediately() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        let state = SettingsState::load(Some(temp_dir.path().to_path_buf()), no_log);

        state.set_close_to_tray(true).expect("persist close to tray");
        state
            .set_allow_permissions(false)
            .expect("persist permission choice");

        let reloaded = load_shell_settings(Some(temp_dir.path()), no_log);
        assert!(reloaded.close_to_tray);
        assert_eq!(reloaded.allow_permissions, Some(false));
    }
}
