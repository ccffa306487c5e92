//! Device locale read from the POSIX locale environment.

use orderdesk_core::DeviceLocale;

/// Variables consulted, highest precedence first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Reads `LC_ALL`, `LC_MESSAGES`, then `LANG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvDeviceLocale;

impl EnvDeviceLocale {
    /// Pick the first meaningful tag from `lookup`.
    ///
    /// Empty values and the `C` / `POSIX` locales carry no language.
    pub fn pick<F>(lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        LOCALE_VARS
            .iter()
            .filter_map(|var| lookup(var))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty() && value != "C" && value != "POSIX" && !value.starts_with("C."))
    }
}

impl DeviceLocale for EnvDeviceLocale {
    fn language_tag(&self) -> Option<String> {
        Self::pick(|var| std::env::var(var).ok())
    }
}
