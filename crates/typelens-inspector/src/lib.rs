#![forbid(unsafe_code)]

//! Per-page inspector for TypeLens.
//!
//! # Role in TypeLens
//! This crate is the content-surface runtime: one [`InspectorSession`] per
//! page turns host-pushed input (selection changes, pointer, keys,
//! scroll/resize, dark-mode broadcasts) into panel and clipboard effects.
//!
//! # This crate provides
//! - [`InspectorSession`] — the explicit session object replacing ambient
//!   page globals, with a `hidden → appearing → visible → closing` panel
//!   lifecycle.
//! - [`PanelView`] / [`PanelRegion`] — the structural view model the host
//!   renders, with exact copy payloads per region.
//! - [`SessionConfig`] — the session timing/layout constants.
//!
//! # How it fits in the system
//! Geometry, extraction, and placement come from `typelens-core`; history
//! appends go through `typelens-store`; the host platform is reached only
//! through `typelens-platform` traits, so the whole session replays
//! deterministically under the in-memory host.

/// Session timing and layout constants.
pub mod config;
/// The panel view model.
pub mod panel;
/// The per-page inspector session.
pub mod session;

pub use config::SessionConfig;
pub use panel::{ColorBlock, PanelRegion, PanelView, PropertyCell, css_declaration_block};
pub use session::{HostCommand, InspectorEvent, InspectorSession, PanelPhase};
