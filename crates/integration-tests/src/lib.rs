//! Integration tests for MiApp.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p miapp-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session_flow` - Event sequences a visitor produces on the page
//! - `snapshots` - Subscription behavior seen by the view renderer
//! - `export_logging` - Export payload reaching the `tracing` log
//!
//! Shared fixtures live here so every test file builds sessions the same way.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use miapp_storefront::clock::FixedClock;
use miapp_storefront::export::DiagnosticSink;
use miapp_storefront::{Catalog, SessionStore, StorefrontConfig};

/// 2025-01-01T00:00:00Z, the instant every test session runs at.
pub const SESSION_START_MILLIS: i64 = 1_735_689_600_000;

/// Export sink that keeps every payload in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink(Arc<Mutex<Vec<Value>>>);

impl CollectingSink {
    /// Payloads exported so far, oldest first.
    #[must_use]
    pub fn payloads(&self) -> Vec<Value> {
        self.0.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl DiagnosticSink for CollectingSink {
    fn export(&self, payload: &Value) {
        if let Ok(mut payloads) = self.0.lock() {
            payloads.push(payload.clone());
        }
    }
}

/// A store over the demo catalog plus the sink its exports land in.
#[derive(Debug)]
pub struct TestContext {
    pub store: SessionStore,
    pub sink: CollectingSink,
}

impl TestContext {
    /// A session without the welcome notifications.
    #[must_use]
    pub fn new() -> Self {
        Self::with_vars(&[("MIAPP_SEED_NOTIFICATIONS", "false")])
    }

    /// A session configured from the given variables.
    ///
    /// # Panics
    ///
    /// Panics if the variables do not form a valid configuration.
    #[must_use]
    pub fn with_vars(vars: &[(&str, &str)]) -> Self {
        let config = StorefrontConfig::from_vars(|key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        })
        .unwrap_or_else(|e| panic!("invalid test configuration: {e}"));
        let catalog = Catalog::demo_in(config.currency).unwrap_or_else(|e| panic!("demo catalog: {e}"));

        let sink = CollectingSink::default();
        let store = SessionStore::with_catalog(config, catalog, FixedClock(session_start()))
            .with_sink(sink.clone());

        Self { store, sink }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed instant test sessions use as "now".
#[must_use]
pub fn session_start() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(SESSION_START_MILLIS)
        .single()
        .unwrap_or_default()
}
