#![forbid(unsafe_code)]

//! Clipboard access.

use crate::error::PlatformError;

/// Write access to the host clipboard.
///
/// A denial is reported to the caller; the caller logs it and moves on
/// (no user-facing retry).
pub trait Clipboard {
    /// Place `text` on the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), PlatformError>;
}
