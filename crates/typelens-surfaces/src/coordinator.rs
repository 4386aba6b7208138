#![forbid(unsafe_code)]

//! The background coordinator.
//!
//! The privileged surface: seeds the preference default at install time
//! and performs the actual history clear on behalf of the settings surface
//! (the two live in different privilege contexts, so clearing crosses the
//! message bus).

use serde_json::Value;
use typelens_platform::Host;
use typelens_store::history::HistoryLog;
use typelens_store::prefs;

use crate::messages::{CoordinatorRequest, CoordinatorResponse};

/// The background surface's behavior over a host platform.
#[derive(Debug)]
pub struct BackgroundCoordinator<H> {
    host: H,
    history: HistoryLog,
}

impl<H: Host> BackgroundCoordinator<H> {
    /// Create the coordinator over a host.
    pub fn new(host: H) -> Self {
        Self {
            host,
            history: HistoryLog::new(),
        }
    }

    /// The underlying host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Install-time initialization: seed the preference default without
    /// clobbering an existing value.
    pub fn on_installed(&mut self) {
        prefs::seed_default(self.host.sync());
        tracing::info!("typelens installed");
    }

    /// Handle a typed coordinator request.
    pub fn handle(&mut self, request: CoordinatorRequest) -> CoordinatorResponse {
        match request {
            CoordinatorRequest::ClearHistory => CoordinatorResponse {
                success: self.history.clear(self.host.local()),
            },
        }
    }

    /// Handle a raw wire message. Messages that are not coordinator
    /// requests are ignored (`None`), matching a listener that simply
    /// declines to respond.
    pub fn handle_raw(&mut self, raw: &Value) -> Option<Value> {
        let request: CoordinatorRequest = match serde_json::from_value(raw.clone()) {
            Ok(request) => request,
            Err(_) => return None,
        };
        let response = self.handle(request);
        match serde_json::to_value(response) {
            Ok(raw) => Some(raw),
            Err(err) => {
                tracing::debug!(%err, "response encode failed");
                None
            }
        }
    }
}
