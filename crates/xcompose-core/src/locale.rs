// XCompose Locale Resolution
// Determines which locale's system Compose file to check against

use std::ffi::CStr;

/// Environment variables consulted in priority order
pub const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("could not determine system locale (set LC_ALL, LC_CTYPE or LANG, or pass --locale)")]
    Undetermined,
}

/// Resolve the current locale from the environment, then the platform
pub fn resolve_locale() -> Result<String, LocaleError> {
    resolve_locale_with(|var| std::env::var(var).ok(), platform_locale)
}

/// Resolve a locale with injectable lookups
///
/// The first non-empty variable of [`LOCALE_VARS`] wins; otherwise the
/// platform query is used.
pub fn resolve_locale_with<E, P>(env: E, platform: P) -> Result<String, LocaleError>
where
    E: Fn(&str) -> Option<String>,
    P: FnOnce() -> Option<String>,
{
    LOCALE_VARS
        .iter()
        .filter_map(|&var| env(var))
        .find(|value| !value.is_empty())
        .or_else(platform)
        .ok_or(LocaleError::Undetermined)
}

/// Ask the C library for the character-type locale configured for this process
///
/// The default `C`/`POSIX` locale carries no Compose table, so it counts as
/// undetermined.
pub fn platform_locale() -> Option<String> {
    // SAFETY: the empty locale string is NUL-terminated, and the returned
    // pointer is copied before any other locale call can invalidate it.
    let name = unsafe {
        let ptr = libc::setlocale(libc::LC_CTYPE, b"\0".as_ptr() as *const libc::c_char);
        if ptr.is_null() {
            return None;
        }
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    };

    match name.as_str() {
        "" | "C" | "POSIX" => None,
        _ => Some(name),
    }
}
