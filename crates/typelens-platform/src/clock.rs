#![forbid(unsafe_code)]

//! Time sources.
//!
//! Monotonic time drives debounce, fade, and feedback deadlines; wall-clock
//! epoch milliseconds stamp snapshots. Hosts that want deterministic
//! behavior (tests, replay) advance a [`DeterministicClock`] explicitly.

use core::time::Duration;

use web_time::{SystemTime, UNIX_EPOCH};

/// A monotonic + wall-clock time source.
pub trait Clock {
    /// Monotonic time since an arbitrary origin.
    fn now_mono(&self) -> Duration;

    /// Wall-clock time, milliseconds since the Unix epoch.
    fn epoch_ms(&self) -> u64;
}

/// Deterministic clock controlled by the host.
#[derive(Debug, Clone, Default)]
pub struct DeterministicClock {
    mono: Duration,
    epoch_ms: u64,
}

impl DeterministicClock {
    /// Create a clock at monotonic zero and epoch zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mono: Duration::ZERO,
            epoch_ms: 0,
        }
    }

    /// Create a clock starting at a given epoch instant.
    #[must_use]
    pub const fn at_epoch_ms(epoch_ms: u64) -> Self {
        Self {
            mono: Duration::ZERO,
            epoch_ms,
        }
    }

    /// Advance both time lines by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.mono = self.mono.saturating_add(dt);
        self.epoch_ms = self.epoch_ms.saturating_add(dt.as_millis() as u64);
    }
}

impl Clock for DeterministicClock {
    fn now_mono(&self) -> Duration {
        self.mono
    }

    fn epoch_ms(&self) -> u64 {
        self.epoch_ms
    }
}

/// Wall clock backed by the host's system time (wasm-safe via `web-time`).
///
/// Monotonicity is approximated from a captured origin; hosts with a real
/// animation-frame timebase should prefer driving a [`DeterministicClock`].
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: SystemTime,
}

impl SystemClock {
    /// Capture the current instant as the monotonic origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: SystemTime::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_mono(&self) -> Duration {
        SystemTime::now()
            .duration_since(self.origin)
            .unwrap_or(Duration::ZERO)
    }

    fn epoch_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
