#![forbid(unsafe_code)]

//! Session timing and layout constants.
//!
//! All values are tuned by feel; they are carried as configurable
//! constants so tests and embeddings can shorten them.

use core::time::Duration;

use typelens_core::placement::DEFAULT_PADDING;

/// Quiescence delay before a burst of selection changes settles into one
/// handling pass.
pub const SELECTION_DEBOUNCE: Duration = Duration::from_millis(100);

/// How long a closing panel stays mounted (non-interactive, invisible) so
/// its fade-out can play.
pub const CLOSE_FADE: Duration = Duration::from_millis(220);

/// How long the "copied" feedback stays up.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(1_500);

/// How long a clicked copy region stays highlighted.
pub const REGION_FLASH: Duration = Duration::from_millis(300);

/// Tunable knobs for an inspector session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Selection-settle debounce.
    pub selection_debounce: Duration,
    /// Closing-transition guard duration.
    pub close_fade: Duration,
    /// Copy-feedback visibility duration.
    pub copy_feedback: Duration,
    /// Clicked-region highlight duration.
    pub region_flash: Duration,
    /// Viewport inset for panel placement.
    pub padding: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            selection_debounce: SELECTION_DEBOUNCE,
            close_fade: CLOSE_FADE,
            copy_feedback: COPY_FEEDBACK,
            region_flash: REGION_FLASH,
            padding: DEFAULT_PADDING,
        }
    }
}
