use std::path::{Path, PathBuf};

use tauri::{Webview, Wry};
use tauri_plugin_dialog::DialogExt;
use url::Url;

use crate::append_desktop_log;

/// File name taken from the last path segment of the download URL.
pub(crate) fn download_file_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
        .unwrap_or_else(|| "download".to_string())
}

/// A picked folder is used verbatim; a cancelled dialog keeps the engine's
/// default destination so the download still proceeds.
pub(crate) fn resolve_download_destination(
    picked_folder: Option<PathBuf>,
    file_name: &str,
    default_destination: &Path,
) -> PathBuf {
    match picked_folder {
        Some(folder) => folder.join(file_name),
        None => default_destination.to_path_buf(),
    }
}

pub(crate) fn handle_download_request(
    webview: &Webview<Wry>,
    url: &Url,
    destination: &mut PathBuf,
) {
    let file_name = download_file_name(url);

    let picked_folder = webview
        .dialog()
        .file()
        .set_title("Select a folder")
        .blocking_pick_folder()
        .and_then(|folder| folder.into_path().ok());

    match &picked_folder {
        Some(folder) => append_desktop_log(&format!(
            "download of {} saved to picked folder {}",
            file_name,
            folder.display()
        )),
        None => append_desktop_log(&format!(
            "download folder dialog cancelled, keeping default destination {}",
            destination.display()
        )),
    }

    *destination = resolve_download_destination(picked_folder, &file_name, destination);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_file_name_uses_the_last_path_segment() {
        let url = Url::parse("https://web.whatsapp.com/media/photo-123.jpg?dl=1")
            .expect("parse test url");
        assert_eq!(download_file_name(&url), "photo-123.jpg");
    }

    #[test]
    fn download_file_name_falls_back_when_the_path_is_bare() {
        let url = Url::parse("https://web.whatsapp.com/").expect("parse test url");
        assert_eq!(download_file_name(&url), "download");
    }

    #[test]
    fn picked_folder_becomes_the_destination_verbatim() {
        let destination = resolve_download_destination(
            Some(PathBuf::from("/home/user/Pictures")),
            "photo.jpg",
            Path::new("/tmp/engine-default/photo.jpg"),
        );
        assert_eq!(destination, PathBuf::from("/home/user/Pictures/photo.jpg"));
    }

    #[test]
    fn cancelled_dialog_keeps_the_default_destination() {
        let destination = resolve_download_destination(
            None,
            "photo.jpg",
            Path::new("/tmp/engine-default/photo.jpg"),
        );
        assert_eq!(destination, PathBuf::from("/tmp/engine-default/photo.jpg"));
    }
}
