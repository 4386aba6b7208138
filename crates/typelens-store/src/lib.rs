#![forbid(unsafe_code)]

//! Persisted state for TypeLens: the lookup history and the display
//! preference.
//!
//! Both live behind [`typelens_platform::StorageArea`] so the same code
//! runs against a real browser storage adapter or the in-memory test host.
//! Failure semantics follow the platform contract: reads degrade to empty,
//! writes report non-success and the caller moves on.

/// The bounded, de-duplicating lookup history.
pub mod history;
/// The persisted display preference.
pub mod prefs;

pub use history::{
    AppendOutcome, DUPLICATE_WINDOW_MS, HISTORY_CAP, HISTORY_KEY, HistoryLog,
};
pub use prefs::DARK_MODE_KEY;
