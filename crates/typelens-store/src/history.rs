#![forbid(unsafe_code)]

//! The bounded, de-duplicating lookup history.
//!
//! An append-only, newest-first sequence of snapshots, capped at
//! [`HISTORY_CAP`] entries and persisted as one JSON array in the local
//! storage namespace. Persistence is at-most-once best-effort: a failed
//! read is an empty log, a failed write discards the in-memory record and
//! reports non-success, with no retry or queuing.

use typelens_core::FontSnapshot;
use typelens_platform::{PlatformError, StorageArea, get_typed, set_typed};

/// Storage key holding the history array.
pub const HISTORY_KEY: &str = "fontHistory";

/// Maximum number of persisted entries.
pub const HISTORY_CAP: usize = 50;

/// Window within which a same-family, same-host lookup counts as a
/// duplicate and is suppressed.
pub const DUPLICATE_WINDOW_MS: u64 = 60_000;

/// Result of an append attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The snapshot was prepended and the log persisted.
    Appended,
    /// An existing entry made the snapshot a duplicate; nothing changed.
    SuppressedDuplicate,
    /// Persisting failed; the snapshot was discarded.
    Dropped,
}

/// Access to the persisted history log.
///
/// Holds only the policy constants; storage is passed per call so surfaces
/// with different host handles share one behavior.
#[derive(Debug, Clone, Copy)]
pub struct HistoryLog {
    duplicate_window_ms: u64,
    cap: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self {
            duplicate_window_ms: DUPLICATE_WINDOW_MS,
            cap: HISTORY_CAP,
        }
    }
}

impl HistoryLog {
    /// Create a log with the default window and cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the duplicate-suppression window.
    #[must_use]
    pub const fn with_duplicate_window_ms(mut self, window_ms: u64) -> Self {
        self.duplicate_window_ms = window_ms;
        self
    }

    /// Override the entry cap.
    #[must_use]
    pub const fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }

    /// Append a snapshot unless it duplicates an existing entry.
    ///
    /// A read failure is treated as an empty log; a write failure is
    /// reported as [`AppendOutcome::Dropped`] and otherwise silent.
    pub fn append<S: StorageArea>(&self, storage: &mut S, snapshot: &FontSnapshot) -> AppendOutcome {
        let mut entries = self.read_all(storage);

        let duplicate = entries.iter().any(|existing| {
            existing.primary_family == snapshot.primary_family
                && existing.source_host == snapshot.source_host
                && existing
                    .captured_at_epoch_ms
                    .abs_diff(snapshot.captured_at_epoch_ms)
                    <= self.duplicate_window_ms
        });
        if duplicate {
            tracing::debug!(
                family = %snapshot.primary_family,
                host = %snapshot.source_host,
                "duplicate lookup suppressed"
            );
            return AppendOutcome::SuppressedDuplicate;
        }

        entries.insert(0, snapshot.clone());
        entries.truncate(self.cap);

        match set_typed(storage, HISTORY_KEY, &entries) {
            Ok(()) => AppendOutcome::Appended,
            Err(err) => {
                tracing::debug!(%err, "history write failed; record discarded");
                AppendOutcome::Dropped
            }
        }
    }

    /// Replace the log with an empty sequence. Returns whether the write
    /// persisted. Idempotent.
    pub fn clear<S: StorageArea>(&self, storage: &mut S) -> bool {
        match set_typed(storage, HISTORY_KEY, &Vec::<FontSnapshot>::new()) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(%err, "history clear failed");
                false
            }
        }
    }

    /// Read the newest `n` entries.
    ///
    /// Missing or undecodable state reads as empty; a platform failure is
    /// surfaced so callers that render an unavailable state can tell the
    /// difference.
    pub fn read_recent<S: StorageArea>(
        &self,
        storage: &S,
        n: usize,
    ) -> Result<Vec<FontSnapshot>, PlatformError> {
        let mut entries: Vec<FontSnapshot> =
            get_typed(storage, HISTORY_KEY)?.unwrap_or_default();
        entries.truncate(n);
        Ok(entries)
    }

    fn read_all<S: StorageArea>(&self, storage: &S) -> Vec<FontSnapshot> {
        match get_typed::<Vec<FontSnapshot>, _>(storage, HISTORY_KEY) {
            Ok(entries) => entries.unwrap_or_default(),
            Err(err) => {
                tracing::debug!(%err, "history read failed; treating as empty");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use typelens_platform::MemoryStorage;

    fn snapshot(family: &str, host: &str, at_ms: u64) -> FontSnapshot {
        FontSnapshot {
            primary_family: family.to_owned(),
            fallback_family: String::new(),
            full_family_stack: family.to_owned(),
            font_size_px: "16px".to_owned(),
            font_weight: "400".to_owned(),
            font_style: "normal".to_owned(),
            line_height: "normal".to_owned(),
            letter_spacing: "normal".to_owned(),
            word_spacing: "0px".to_owned(),
            text_transform: "none".to_owned(),
            text_decoration: "none".to_owned(),
            color_hex: "#000000".to_owned(),
            color_rgb_raw: "rgb(0, 0, 0)".to_owned(),
            is_known_web_font: false,
            web_font_catalog_url: None,
            captured_at_epoch_ms: at_ms,
            source_host: host.to_owned(),
        }
    }

    #[test]
    fn append_prepends_newest_first() {
        let mut storage = MemoryStorage::new();
        let log = HistoryLog::new();
        log.append(&mut storage, &snapshot("Inter", "a.com", 0));
        log.append(&mut storage, &snapshot("Lato", "a.com", 1_000));

        let recent = log.read_recent(&storage, 10).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].primary_family, "Lato");
        assert_eq!(recent[1].primary_family, "Inter");
    }

    #[test]
    fn duplicate_inside_window_is_suppressed() {
        let mut storage = MemoryStorage::new();
        let log = HistoryLog::new();
        assert_eq!(
            log.append(&mut storage, &snapshot("Inter", "a.com", 0)),
            AppendOutcome::Appended
        );
        assert_eq!(
            log.append(&mut storage, &snapshot("Inter", "a.com", 60_000)),
            AppendOutcome::SuppressedDuplicate
        );
        assert_eq!(log.read_recent(&storage, 10).unwrap().len(), 1);
    }

    #[test]
    fn same_family_outside_window_appends() {
        let mut storage = MemoryStorage::new();
        let log = HistoryLog::new();
        log.append(&mut storage, &snapshot("Inter", "a.com", 0));
        assert_eq!(
            log.append(&mut storage, &snapshot("Inter", "a.com", 60_001)),
            AppendOutcome::Appended
        );
        assert_eq!(log.read_recent(&storage, 10).unwrap().len(), 2);
    }

    #[test]
    fn same_family_different_host_is_not_a_duplicate() {
        let mut storage = MemoryStorage::new();
        let log = HistoryLog::new();
        log.append(&mut storage, &snapshot("Inter", "a.com", 0));
        assert_eq!(
            log.append(&mut storage, &snapshot("Inter", "b.com", 1_000)),
            AppendOutcome::Appended
        );
    }

    #[test]
    fn log_is_capped_most_recent_first() {
        let mut storage = MemoryStorage::new();
        let log = HistoryLog::new();
        for i in 0..60u64 {
            let outcome = log.append(
                &mut storage,
                &snapshot(&format!("Family {i}"), "a.com", i * 120_000),
            );
            assert_eq!(outcome, AppendOutcome::Appended);
        }

        let all = log.read_recent(&storage, 100).unwrap();
        assert_eq!(all.len(), HISTORY_CAP);
        assert_eq!(all[0].primary_family, "Family 59");
        assert_eq!(all[49].primary_family, "Family 10");
    }

    #[test]
    fn write_failure_drops_the_record() {
        let mut storage = MemoryStorage::new();
        let log = HistoryLog::new();
        storage.fail_writes(true);
        assert_eq!(
            log.append(&mut storage, &snapshot("Inter", "a.com", 0)),
            AppendOutcome::Dropped
        );
        storage.fail_writes(false);
        assert!(log.read_recent(&storage, 10).unwrap().is_empty());
    }

    #[test]
    fn read_failure_during_append_treats_log_as_empty() {
        let mut storage = MemoryStorage::new();
        let log = HistoryLog::new();
        log.append(&mut storage, &snapshot("Inter", "a.com", 0));
        storage.fail_reads(true);
        // The existing entry is invisible, so the "duplicate" appends and
        // overwrites the log with a single record.
        assert_eq!(
            log.append(&mut storage, &snapshot("Inter", "a.com", 1_000)),
            AppendOutcome::Appended
        );
        storage.fail_reads(false);
        assert_eq!(log.read_recent(&storage, 10).unwrap().len(), 1);
    }

    #[test]
    fn clear_is_idempotent_and_read_recent_never_errors_on_empty() {
        let mut storage = MemoryStorage::new();
        let log = HistoryLog::new();
        assert!(log.clear(&mut storage));
        assert!(log.clear(&mut storage));
        assert_eq!(log.read_recent(&storage, 10).unwrap(), Vec::new());
    }

    #[test]
    fn undecodable_persisted_state_reads_as_empty() {
        let mut storage = MemoryStorage::new();
        storage
            .set(HISTORY_KEY, serde_json::json!({ "not": "an array" }))
            .unwrap();
        let log = HistoryLog::new();
        assert!(log.read_recent(&storage, 10).unwrap().is_empty());
    }

    #[test]
    fn custom_window_is_honored() {
        let mut storage = MemoryStorage::new();
        let log = HistoryLog::new().with_duplicate_window_ms(10);
        log.append(&mut storage, &snapshot("Inter", "a.com", 0));
        assert_eq!(
            log.append(&mut storage, &snapshot("Inter", "a.com", 11)),
            AppendOutcome::Appended
        );
    }
}
