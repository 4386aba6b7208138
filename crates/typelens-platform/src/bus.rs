#![forbid(unsafe_code)]

//! Inter-surface messaging.
//!
//! Two shapes: a fire-and-forget broadcast (settings → all inspectors) and
//! a request/response exchange (settings → background coordinator).
//! Delivery is best-effort and unordered; zero recipients is a no-op, not
//! an error.

use serde_json::Value;

use crate::error::PlatformError;

/// A best-effort message channel between extension surfaces.
pub trait MessageBus {
    /// Send `message` to all listening surfaces. No acknowledgment is
    /// expected; a closed channel or zero recipients is not a failure of
    /// the caller's operation.
    fn broadcast(&mut self, message: &Value) -> Result<(), PlatformError>;

    /// Send `message` to the privileged coordinator and wait for its
    /// response.
    fn request(&mut self, message: &Value) -> Result<Value, PlatformError>;
}

/// Log a broadcast failure, filtering the benign channel-closed case down
/// to a debug line. Returns whether the failure was benign.
pub fn log_send_failure(context: &'static str, err: &PlatformError) -> bool {
    if err.is_benign_channel_closed() {
        tracing::debug!(context, "message recipient went away; ignoring");
        true
    } else {
        tracing::warn!(context, %err, "message send failed");
        false
    }
}
