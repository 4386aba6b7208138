#![forbid(unsafe_code)]

//! The persisted display preference.
//!
//! One boolean in the synchronized namespace, default `false`. Surfaces
//! read it at initialization and refresh it on a dark-mode broadcast; no
//! component caches a stale copy past receipt of a change notification.

use typelens_platform::{PlatformError, StorageArea, get_typed, set_typed};

/// Storage key for the dark-mode preference.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Read the preference, distinguishing platform failure from "unset".
pub fn load_dark_mode<S: StorageArea>(storage: &S) -> Result<bool, PlatformError> {
    Ok(get_typed(storage, DARK_MODE_KEY)?.unwrap_or(false))
}

/// Read the preference, degrading any failure to the default.
#[must_use]
pub fn load_dark_mode_or_default<S: StorageArea>(storage: &S) -> bool {
    match load_dark_mode(storage) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(%err, "preference read failed; using default");
            false
        }
    }
}

/// Persist the preference. Returns whether the write succeeded.
pub fn store_dark_mode<S: StorageArea>(storage: &mut S, value: bool) -> bool {
    match set_typed(storage, DARK_MODE_KEY, &value) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(%err, "preference write failed");
            false
        }
    }
}

/// Seed the default (`false`) when the preference has never been written.
/// Used by the coordinator at install time; an existing value is left
/// untouched.
pub fn seed_default<S: StorageArea>(storage: &mut S) {
    match get_typed::<bool, _>(storage, DARK_MODE_KEY) {
        Ok(Some(_)) => {}
        Ok(None) => {
            let _ = store_dark_mode(storage, false);
        }
        Err(err) => {
            tracing::debug!(%err, "preference seed skipped; storage unavailable");
        }
    }
}
