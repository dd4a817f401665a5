use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{runtime_paths, DESKTOP_LOG_FILE};

pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, log_file: &str) -> PathBuf {
    match root_dir {
        Some(root) => root.join("logs").join(log_file),
        None => PathBuf::from(log_file),
    }
}

fn append_line(log_path: &Path, area: &str, message: &str) -> Result<(), String> {
    if let Some(parent_dir) = log_path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|error| format!("Failed to open log file {}: {}", log_path.display(), error))?;

    writeln!(
        log_file,
        "[{}] {}: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        area,
        message
    )
    .map_err(|error| format!("Failed to write log file {}: {}", log_path.display(), error))
}

fn append_with_area(area: &'static str, message: &str) {
    let log_path = resolve_desktop_log_path(runtime_paths::default_root_dir(), DESKTOP_LOG_FILE);
    if let Err(error) = append_line(&log_path, area, message) {
        // Logging must never take the shell down; last resort is stderr.
        eprintln!("{error}; dropped log line: {area}: {message}");
    }
}

pub(crate) fn append_desktop_log(message: &str) {
    append_with_area("desktop", message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_with_area("startup", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_with_area("shutdown", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_desktop_log_path_places_log_under_root_logs_dir() {
        let path = resolve_desktop_log_path(Some(PathBuf::from("/tmp/zapdesk")), "desktop.log");
        assert_eq!(path, PathBuf::from("/tmp/zapdesk/logs/desktop.log"));
    }

    #[test]
    fn append_line_creates_missing_directories_and_appends() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        let log_path = temp_dir.path().join("logs").join("desktop.log");

        append_line(&log_path, "startup", "first").expect("first append");
        append_line(&log_path, "desktop", "second").expect("second append");

        let contents = std::fs::read_to_string(&log_path).expect("read log");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("startup: first"));
        assert!(lines[1].ends_with("desktop: second"));
    }
}
