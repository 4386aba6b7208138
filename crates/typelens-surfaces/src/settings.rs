#![forbid(unsafe_code)]

//! The settings surface (popup).
//!
//! Reads the display preference and a bounded history prefix for display,
//! toggles dark mode (persist first, broadcast only on success), and asks
//! the background coordinator to clear history. Every platform failure
//! degrades to an unavailable or empty view state; nothing here surfaces
//! an error to the user beyond those states.

use typelens_platform::bus::{MessageBus, log_send_failure};
use typelens_platform::{Clipboard, Host};
use typelens_store::history::HistoryLog;
use typelens_store::prefs;

use crate::messages::{BroadcastMessage, CoordinatorRequest, CoordinatorResponse};

/// How many history rows the popup shows.
pub const HISTORY_DISPLAY_LIMIT: usize = 10;

/// Dark-mode toggle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    /// Toggle is interactive and reflects the persisted value.
    Ready { dark: bool },
    /// Storage is unavailable; rendered disabled with an explanatory note.
    Unavailable,
}

/// One rendered history row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// Headline: the primary family; also the row's copy payload.
    pub primary_family: String,
    /// Detail line: `host • weight • size`.
    pub detail: String,
}

/// The history list's display state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryPanel {
    /// Local storage is unavailable.
    Unavailable,
    /// No lookups recorded yet.
    Empty,
    /// Up to [`HISTORY_DISPLAY_LIMIT`] rows, newest first.
    Rows(Vec<HistoryRow>),
}

/// Everything the popup renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub dark_mode: ToggleState,
    pub history: HistoryPanel,
}

/// The popup's behavior over a host platform.
#[derive(Debug)]
pub struct SettingsSurface<H> {
    host: H,
    history: HistoryLog,
}

impl<H: Host> SettingsSurface<H> {
    /// Create the surface over a host.
    pub fn new(host: H) -> Self {
        Self {
            host,
            history: HistoryLog::new(),
        }
    }

    /// The underlying host (tests inspect captured effects through it).
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Build the current view state.
    pub fn view(&mut self) -> SettingsView {
        let dark_mode = match prefs::load_dark_mode(&*self.host.sync()) {
            Ok(dark) => ToggleState::Ready { dark },
            Err(err) => {
                tracing::debug!(%err, "preference unavailable; disabling toggle");
                ToggleState::Unavailable
            }
        };

        let history = match self
            .history
            .read_recent(&*self.host.local(), HISTORY_DISPLAY_LIMIT)
        {
            Err(err) => {
                tracing::debug!(%err, "history unavailable");
                HistoryPanel::Unavailable
            }
            Ok(entries) if entries.is_empty() => HistoryPanel::Empty,
            Ok(entries) => HistoryPanel::Rows(
                entries
                    .iter()
                    .map(|snap| HistoryRow {
                        primary_family: snap.primary_family.clone(),
                        detail: format!(
                            "{} \u{2022} {} \u{2022} {}",
                            snap.source_host, snap.font_weight, snap.font_size_px
                        ),
                    })
                    .collect(),
            ),
        };

        SettingsView { dark_mode, history }
    }

    /// Persist a new dark-mode value, then notify active inspectors.
    ///
    /// The broadcast only goes out after a successful persist, and its own
    /// failure never fails the toggle (zero recipients is a no-op).
    /// Returns whether the value persisted.
    pub fn set_dark_mode(&mut self, value: bool) -> bool {
        if !prefs::store_dark_mode(self.host.sync(), value) {
            return false;
        }
        match serde_json::to_value(BroadcastMessage::SetDarkMode { value }) {
            Ok(raw) => {
                if let Err(err) = self.host.bus().broadcast(&raw) {
                    log_send_failure("dark-mode broadcast", &err);
                }
            }
            Err(err) => {
                tracing::debug!(%err, "broadcast encode failed");
            }
        }
        true
    }

    /// Ask the coordinator to clear the history. Returns whether it
    /// reported success; the caller reloads the view on `true`.
    pub fn clear_history(&mut self) -> bool {
        let raw = match serde_json::to_value(CoordinatorRequest::ClearHistory) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::debug!(%err, "request encode failed");
                return false;
            }
        };
        match self.host.bus().request(&raw) {
            Ok(reply) => serde_json::from_value::<CoordinatorResponse>(reply)
                .map(|resp| resp.success)
                .unwrap_or(false),
            Err(err) => {
                log_send_failure("clear-history request", &err);
                false
            }
        }
    }

    /// Copy a displayed row's family name. Returns whether the clipboard
    /// accepted it.
    pub fn copy_history_entry(&mut self, index: usize) -> bool {
        let Ok(entries) = self
            .history
            .read_recent(&*self.host.local(), HISTORY_DISPLAY_LIMIT)
        else {
            return false;
        };
        let Some(snap) = entries.get(index) else {
            return false;
        };
        let family = snap.primary_family.clone();
        match self.host.clipboard().write_text(&family) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(%err, "clipboard write rejected");
                false
            }
        }
    }
}
