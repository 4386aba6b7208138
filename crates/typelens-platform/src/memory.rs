#![forbid(unsafe_code)]

//! In-memory host pieces.
//!
//! Deterministic implementations of the platform traits, used by tests and
//! by embeddings that buffer platform effects for a host to apply. Failure
//! injection flags let tests exercise every degradation path.

use std::collections::BTreeMap;
use std::collections::VecDeque;

use serde_json::Value;

use crate::bus::MessageBus;
use crate::clipboard::Clipboard;
use crate::error::PlatformError;
use crate::storage::StorageArea;

/// An in-memory JSON storage namespace.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<String, Value>,
    available: bool,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Create an empty, available storage area.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            available: true,
            fail_reads: false,
            fail_writes: false,
        }
    }

    /// Create a storage area whose every call reports
    /// [`PlatformError::Unavailable`].
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Make subsequent reads fail.
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make subsequent writes fail.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Direct access to the stored value, bypassing failure injection.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageArea for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Value>, PlatformError> {
        if !self.available {
            return Err(PlatformError::Unavailable);
        }
        if self.fail_reads {
            return Err(PlatformError::Backend("injected read failure".to_owned()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), PlatformError> {
        if !self.available {
            return Err(PlatformError::Unavailable);
        }
        if self.fail_writes {
            return Err(PlatformError::Backend("injected write failure".to_owned()));
        }
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }
}

/// An in-memory message bus that records broadcasts and replays queued
/// responses to requests.
#[derive(Debug, Default)]
pub struct MemoryBus {
    /// Every broadcast message, in send order.
    pub broadcasts: Vec<Value>,
    /// Every request message, in send order.
    pub requests: Vec<Value>,
    responses: VecDeque<Result<Value, PlatformError>>,
    broadcast_error: Option<PlatformError>,
}

impl MemoryBus {
    /// Create a bus with no queued responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the response returned by the next `request` call.
    pub fn push_response(&mut self, response: Result<Value, PlatformError>) {
        self.responses.push_back(response);
    }

    /// Make every subsequent broadcast report `err`.
    pub fn fail_broadcasts(&mut self, err: PlatformError) {
        self.broadcast_error = Some(err);
    }
}

impl MessageBus for MemoryBus {
    fn broadcast(&mut self, message: &Value) -> Result<(), PlatformError> {
        if let Some(err) = &self.broadcast_error {
            return Err(err.clone());
        }
        self.broadcasts.push(message.clone());
        Ok(())
    }

    fn request(&mut self, message: &Value) -> Result<Value, PlatformError> {
        self.requests.push(message.clone());
        self.responses
            .pop_front()
            .unwrap_or(Err(PlatformError::Unavailable))
    }
}

/// A clipboard that captures written text.
#[derive(Debug, Clone, Default)]
pub struct CaptureClipboard {
    /// Every text placed on the clipboard, in write order.
    pub writes: Vec<String>,
    deny: bool,
}

impl CaptureClipboard {
    /// Create an accepting clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes report a denial.
    pub fn deny(&mut self, deny: bool) {
        self.deny = deny;
    }
}

impl Clipboard for CaptureClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), PlatformError> {
        if self.deny {
            return Err(PlatformError::ClipboardDenied(
                "write rejected by host".to_owned(),
            ));
        }
        self.writes.push(text.to_owned());
        Ok(())
    }
}
