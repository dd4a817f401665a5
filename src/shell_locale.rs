use std::env;

use crate::DEFAULT_SHELL_LOCALE;

/// Locale of the host session, used as the webview's language hint (and with
/// it, the engine's spell-check language where the platform supports it).
pub(crate) fn resolve_shell_locale(default_shell_locale: &str) -> String {
    for env_key in ["ZAPDESK_LOCALE", "LC_ALL", "LANG"] {
        if let Ok(value) = env::var(env_key) {
            if let Some(locale) = normalize_shell_locale(&value) {
                return locale;
            }
        }
    }

    default_shell_locale.to_string()
}

/// Normalizes POSIX-style locale names (`en_US.UTF-8`) into BCP 47 language
/// tags (`en-US`). Values without a recognizable language part are rejected.
pub(crate) fn normalize_shell_locale(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "C" || raw == "POSIX" {
        return None;
    }

    // Drop any encoding or modifier suffix ("en_US.UTF-8", "de_DE@euro").
    let base = raw.split(['.', '@']).next().unwrap_or(raw);
    let mut parts = base.split(['_', '-']);

    let language = parts.next().unwrap_or("");
    if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut normalized = language.to_ascii_lowercase();
    if let Some(region) = parts
        .next()
        .filter(|region| !region.is_empty() && region.chars().all(|c| c.is_ascii_alphanumeric()))
    {
        normalized.push('-');
        normalized.push_str(&region.to_ascii_uppercase());
    }

    Some(normalized)
}

/// Browser arguments carrying the resolved locale; only the Windows webview
/// accepts a language switch, elsewhere the engine follows the session locale
/// on its own.
#[cfg(windows)]
pub(crate) fn browser_language_args(locale: &str) -> String {
    format!("--lang={locale}")
}

pub(crate) fn current_shell_locale() -> String {
    resolve_shell_locale(DEFAULT_SHELL_LOCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_shell_locale_strips_encoding_suffix() {
        assert_eq!(
            normalize_shell_locale("en_US.UTF-8"),
            Some("en-US".to_string())
        );
        assert_eq!(
            normalize_shell_locale("de_DE@euro"),
            Some("de-DE".to_string())
        );
    }

    #[test]
    fn normalize_shell_locale_accepts_language_only_values() {
        assert_eq!(normalize_shell_locale("fr"), Some("fr".to_string()));
        assert_eq!(normalize_shell_locale("PT_br"), Some("pt-BR".to_string()));
    }

    #[test]
    fn normalize_shell_locale_rejects_posix_placeholders() {
        assert_eq!(normalize_shell_locale(""), None);
        assert_eq!(normalize_shell_locale("C"), None);
        assert_eq!(normalize_shell_locale("POSIX"), None);
        assert_eq!(normalize_shell_locale("1234"), None);
    }
}
