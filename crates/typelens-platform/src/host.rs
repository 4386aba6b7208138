#![forbid(unsafe_code)]

//! The bundled host platform.
//!
//! Each surface runs against one [`Host`], which groups the storage
//! namespaces, the message bus, the clipboard, and the clock behind
//! associated types. Real embeddings adapt browser APIs; tests use
//! [`MemoryHost`].

use crate::bus::MessageBus;
use crate::clipboard::Clipboard;
use crate::clock::{Clock, DeterministicClock};
use crate::memory::{CaptureClipboard, MemoryBus, MemoryStorage};
use crate::storage::StorageArea;

/// Everything a surface needs from the host platform.
pub trait Host {
    /// Local (per-machine) storage namespace; holds the lookup history.
    type Local: StorageArea;
    /// Synchronized storage namespace; holds the display preference.
    type Sync: StorageArea;
    /// Inter-surface message channel.
    type Bus: MessageBus;
    /// Host clipboard.
    type Clip: Clipboard;
    /// Time source.
    type Clock: Clock;

    fn local(&mut self) -> &mut Self::Local;
    fn sync(&mut self) -> &mut Self::Sync;
    fn bus(&mut self) -> &mut Self::Bus;
    fn clipboard(&mut self) -> &mut Self::Clip;
    fn clock(&self) -> &Self::Clock;
}

/// A fully in-memory host with a deterministic clock.
#[derive(Debug, Default)]
pub struct MemoryHost {
    /// Local storage namespace.
    pub local: MemoryStorage,
    /// Synchronized storage namespace.
    pub sync: MemoryStorage,
    /// Message bus.
    pub bus: MemoryBus,
    /// Clipboard.
    pub clipboard: CaptureClipboard,
    /// Host-advanced clock.
    pub clock: DeterministicClock,
}

impl MemoryHost {
    /// Create an empty host at monotonic zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host whose clock starts at a given epoch instant.
    #[must_use]
    pub fn at_epoch_ms(epoch_ms: u64) -> Self {
        Self {
            clock: DeterministicClock::at_epoch_ms(epoch_ms),
            ..Self::default()
        }
    }
}

impl Host for MemoryHost {
    type Local = MemoryStorage;
    type Sync = MemoryStorage;
    type Bus = MemoryBus;
    type Clip = CaptureClipboard;
    type Clock = DeterministicClock;

    fn local(&mut self) -> &mut Self::Local {
        &mut self.local
    }

    fn sync(&mut self) -> &mut Self::Sync {
        &mut self.sync
    }

    fn bus(&mut self) -> &mut Self::Bus {
        &mut self.bus
    }

    fn clipboard(&mut self) -> &mut Self::Clip {
        &mut self.clipboard
    }

    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}
