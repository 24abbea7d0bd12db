//! Session data export.
//!
//! The export button dumps favorites, cart and user to a diagnostic sink for
//! inspection. There is no schema guarantee on the payload.

use serde::Serialize;
use serde_json::Value;

use crate::models::User;
use crate::session::{Cart, Favorites, SessionState};

/// Borrowed view of the exported part of a session.
#[derive(Debug, Serialize)]
pub struct ExportedData<'a> {
    pub favorites: &'a Favorites,
    pub cart: &'a Cart,
    pub user: Option<&'a User>,
}

impl<'a> From<&'a SessionState> for ExportedData<'a> {
    fn from(state: &'a SessionState) -> Self {
        Self {
            favorites: &state.favorites,
            cart: &state.cart,
            user: state.user.as_ref(),
        }
    }
}

/// Destination for exported session data.
pub trait DiagnosticSink: Send + Sync {
    fn export(&self, payload: &Value);
}

/// Writes exports to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn export(&self, payload: &Value) {
        tracing::info!(target: "miapp::export", data = %payload, "Exporting session data");
    }
}
