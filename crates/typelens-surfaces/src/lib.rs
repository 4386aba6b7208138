#![forbid(unsafe_code)]

//! TypeLens surfaces outside the inspected page.
//!
//! The settings surface (popup) and the background coordinator, plus the
//! wire schema for the messages that cross between them and the in-page
//! inspectors. Both surfaces are written against the platform traits, so
//! every behavior here runs unchanged over the in-memory host in tests.

pub mod coordinator;
pub mod messages;
pub mod settings;

pub use coordinator::BackgroundCoordinator;
pub use messages::{BroadcastMessage, CoordinatorRequest, CoordinatorResponse};
pub use settings::{
    HISTORY_DISPLAY_LIMIT, HistoryPanel, HistoryRow, SettingsSurface, SettingsView, ToggleState,
};
