#![forbid(unsafe_code)]

//! Platform error taxonomy.
//!
//! Every failure here is expected to be degraded at the call site: storage
//! readers fall back to empty, writers report non-success, and messaging
//! treats a closed channel as a no-op. Nothing in this taxonomy is meant to
//! reach the user.

/// The benign error text a host reports when a message recipient went away
/// before responding.
pub const CHANNEL_CLOSED_TEXT: &str = "message port closed before a response was received";

/// Errors surfaced by host platform calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The persistence or messaging platform is absent or inactive.
    Unavailable,
    /// The message recipient disappeared before responding.
    ChannelClosed(String),
    /// The clipboard rejected the write.
    ClipboardDenied(String),
    /// Any other host-reported failure.
    Backend(String),
}

impl PlatformError {
    /// Whether this is the known, expected channel-closed error that is
    /// logged at most at low severity and never surfaced.
    #[must_use]
    pub fn is_benign_channel_closed(&self) -> bool {
        match self {
            Self::ChannelClosed(text) => text.contains(CHANNEL_CLOSED_TEXT),
            _ => false,
        }
    }
}

impl core::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "platform unavailable"),
            Self::ChannelClosed(text) => write!(f, "channel closed: {text}"),
            Self::ClipboardDenied(text) => write!(f, "clipboard denied: {text}"),
            Self::Backend(text) => write!(f, "platform error: {text}"),
        }
    }
}

impl std::error::Error for PlatformError {}
