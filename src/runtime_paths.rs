use std::{env, path::PathBuf};

use crate::ROOT_DIR_ENV;

/// Root directory for shell state and logs: `$ZAPDESK_ROOT` when set,
/// otherwise `~/.zapdesk`.
pub(crate) fn default_root_dir() -> Option<PathBuf> {
    if let Ok(root) = env::var(ROOT_DIR_ENV) {
        let path = PathBuf::from(root.trim());
        if !path.as_os_str().is_empty() {
            return Some(path);
        }
    }

    home::home_dir().map(|home| home.join(".zapdesk"))
}
