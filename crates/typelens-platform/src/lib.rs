#![forbid(unsafe_code)]

//! Host platform abstraction for TypeLens.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment owns the real browser
//!   APIs and adapts them to these traits; surfaces never touch the host
//!   directly.
//! - **Deterministic time**: hosts advance a monotonic clock explicitly, so
//!   debounce and fade behavior replays exactly in tests.
//! - **Degrade, never fail**: every accessor's error is expected to be
//!   turned into an empty result or a no-op at the call site.
//!
//! The in-memory implementations ([`MemoryHost`] and its pieces) double as
//! the test harness and as buffers for embeddings that apply platform
//! effects asynchronously.

/// Inter-surface messaging traits.
pub mod bus;
/// Clipboard access.
pub mod clipboard;
/// Time sources.
pub mod clock;
/// Platform error taxonomy.
pub mod error;
/// The bundled host platform.
pub mod host;
/// In-memory host pieces.
pub mod memory;
/// Key-value storage areas.
pub mod storage;

pub use bus::MessageBus;
pub use clipboard::Clipboard;
pub use clock::{Clock, DeterministicClock, SystemClock};
pub use error::{CHANNEL_CLOSED_TEXT, PlatformError};
pub use host::{Host, MemoryHost};
pub use memory::{CaptureClipboard, MemoryBus, MemoryStorage};
pub use storage::{StorageArea, get_typed, set_typed};
