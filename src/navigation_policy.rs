use std::process::{Command, Stdio};

use url::Url;

/// Hosts that belong to the embedded web application. Navigations anywhere
/// else leave the shell and go to the system browser instead.
const WEB_APP_HOSTS: &[&str] = &["web.whatsapp.com", "www.whatsapp.com", "whatsapp.com"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavigationDisposition {
    AllowInApp,
    OpenExternally,
}

pub(crate) fn navigation_disposition(url: &Url) -> NavigationDisposition {
    match url.host_str() {
        Some(host)
            if WEB_APP_HOSTS
                .iter()
                .any(|allowed| host.eq_ignore_ascii_case(allowed)) =>
        {
            NavigationDisposition::AllowInApp
        }
        _ => NavigationDisposition::OpenExternally,
    }
}

fn parse_openable_url(raw_url: &str) -> Result<Url, String> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err("Missing external URL.".to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|error| format!("Invalid URL: {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(format!(
            "Unsupported URL scheme '{scheme}', only http/https are allowed."
        )),
    }
}

pub(crate) fn open_in_system_browser(raw_url: &str) -> Result<(), String> {
    let parsed = parse_openable_url(raw_url)?;
    open_url_with_system_browser(parsed.as_ref())
}

#[cfg(target_os = "macos")]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("open")
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'open': {error}"))
}

#[cfg(target_os = "windows")]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("rundll32")
        .args(["url.dll,FileProtocolHandler", url])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'rundll32': {error}"))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("xdg-open")
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'xdg-open': {error}"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows", unix)))]
fn open_url_with_system_browser(_url: &str) -> Result<(), String> {
    Err("Opening external URLs is not supported on this platform.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).expect("parse test url")
    }

    #[test]
    fn navigation_disposition_keeps_web_app_hosts_in_app() {
        assert_eq!(
            navigation_disposition(&url("https://web.whatsapp.com/")),
            NavigationDisposition::AllowInApp
        );
        assert_eq!(
            navigation_disposition(&url("https://WEB.WHATSAPP.COM/post-login")),
            NavigationDisposition::AllowInApp
        );
        assert_eq!(
            navigation_disposition(&url("https://www.whatsapp.com/download")),
            NavigationDisposition::AllowInApp
        );
    }

    #[test]
    fn navigation_disposition_sends_foreign_hosts_to_the_system_browser() {
        assert_eq!(
            navigation_disposition(&url("https://example.com/shared-link")),
            NavigationDisposition::OpenExternally
        );
        assert_eq!(
            navigation_disposition(&url("https://faq.whatsapp.net/")),
            NavigationDisposition::OpenExternally
        );
    }

    #[test]
    fn parse_openable_url_accepts_only_http_and_https() {
        assert!(parse_openable_url("https://example.com/").is_ok());
        assert!(parse_openable_url("http://example.com/").is_ok());
        assert!(parse_openable_url("file:///etc/passwd").is_err());
        assert!(parse_openable_url("   ").is_err());
        assert!(parse_openable_url("not a url").is_err());
    }
}
