#![forbid(unsafe_code)]

//! Inter-surface wire schema.
//!
//! Two message families cross surface boundaries: a fire-and-forget
//! dark-mode broadcast to all inspectors, and a request/response exchange
//! with the background coordinator (which lives in a different privilege
//! context and performs the actual persistence clear). Wire strings are
//! fixed by the persisted protocol.

use serde::{Deserialize, Serialize};

/// Broadcast from the settings surface to every active inspector.
///
/// Serializes as `{ "type": "SET_DARK_MODE", "value": <bool> }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BroadcastMessage {
    #[serde(rename = "SET_DARK_MODE")]
    SetDarkMode { value: bool },
}

/// Request handled by the background coordinator.
///
/// Serializes as `{ "action": "clear_history" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum CoordinatorRequest {
    #[serde(rename = "clear_history")]
    ClearHistory,
}

/// Coordinator reply: `{ "success": <bool> }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatorResponse {
    pub success: bool,
}
