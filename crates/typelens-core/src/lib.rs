#![forbid(unsafe_code)]

//! Core vocabulary for TypeLens.
//!
//! # Role in TypeLens
//! `typelens-core` is the shared, pure layer every surface builds on: the
//! snapshot value captured per lookup, selection-to-snapshot extraction,
//! computed-color conversion, the known web-font catalog, pixel-space
//! geometry, and viewport-aware panel placement.
//!
//! # This crate provides
//! - [`FontSnapshot`] — the immutable per-lookup record.
//! - [`extract::snapshot`] — selection → snapshot, or nothing to show.
//! - [`color::to_hex`] — `rgb()`/`rgba()` → `#RRGGBB`, pass-through on miss.
//! - [`placement::place`] — pure panel placement with above/below/centered
//!   fallback.
//! - Keyboard event types the host forwards to the inspector.
//!
//! # How it fits in the system
//! `typelens-store` persists snapshots, `typelens-inspector` drives the
//! panel from extraction and placement, and `typelens-surfaces` renders
//! snapshot history. This crate keeps that layer deterministic and free of
//! host concerns.

/// Known web-font catalog and lookup-URL construction.
pub mod catalog;
/// Computed-color conversion.
pub mod color;
/// Canonical keyboard input types.
pub mod event;
/// Selection-to-snapshot extraction.
pub mod extract;
/// Geometric primitives in CSS pixel space.
pub mod geometry;
/// Viewport-aware panel placement.
pub mod placement;
/// The immutable per-lookup record.
pub mod snapshot;

pub use event::{KeyCode, KeyEvent, Modifiers};
pub use extract::{ComputedTextStyle, Selection};
pub use geometry::{RectF, SizeF, Viewport};
pub use placement::{DEFAULT_PADDING, PanelPlacement, place};
pub use snapshot::FontSnapshot;
