#![forbid(unsafe_code)]

//! Key-value storage areas.
//!
//! Two namespaces exist with the same contract: a synchronized one (shared
//! across a user's installations, holds the display preference) and a local
//! one (per machine, holds the lookup history). Values are JSON; typed
//! access goes through serde.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::PlatformError;

/// A JSON key-value storage namespace.
///
/// Reads distinguish "missing" (`Ok(None)`) from "platform failed"
/// (`Err(_)`); callers are expected to degrade the latter to empty results
/// rather than propagate it to the user.
pub trait StorageArea {
    /// Read the raw value under `key`.
    fn get(&self, key: &str) -> Result<Option<Value>, PlatformError>;

    /// Write `value` under `key`.
    fn set(&mut self, key: &str, value: Value) -> Result<(), PlatformError>;
}

/// Read and decode a typed value; an undecodable stored value is treated as
/// missing, not as an error.
pub fn get_typed<T: DeserializeOwned, S: StorageArea + ?Sized>(
    storage: &S,
    key: &str,
) -> Result<Option<T>, PlatformError> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_value(raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            tracing::debug!(key, %err, "stored value failed to decode; treating as missing");
            Ok(None)
        }
    }
}

/// Encode and write a typed value.
pub fn set_typed<T: Serialize, S: StorageArea + ?Sized>(
    storage: &mut S,
    key: &str,
    value: &T,
) -> Result<(), PlatformError> {
    let raw = serde_json::to_value(value)
        .map_err(|err| PlatformError::Backend(format!("encode {key}: {err}")))?;
    storage.set(key, raw)
}
