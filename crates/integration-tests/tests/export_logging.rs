//! Integration tests for the default export sink, which writes to `tracing`.

use std::io;
use std::sync::{Arc, Mutex};

use miapp_core::ProductId;
use miapp_storefront::models::ContactField;
use miapp_storefront::{Event, SessionStore, StorefrontConfig};
use tracing_subscriber::fmt::format::FmtSpan;

/// `io::Write` target shared with the subscriber.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut bytes) = self.0.lock() {
            bytes.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn default_store() -> SessionStore {
    let config = StorefrontConfig::from_vars(|_| None).expect("defaults are valid");
    SessionStore::new(config).expect("demo catalog builds")
}

#[test]
fn test_export_is_logged_as_json() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_env_filter(tracing_subscriber::EnvFilter::new("miapp=info"))
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut store = default_store();
        store
            .dispatch(Event::ToggleFavorite(ProductId::new(3)))
            .expect("never fails");
        store.dispatch(Event::Login).expect("never fails");
        store.dispatch(Event::ExportData).expect("never fails");
    });

    let logs = captured.contents();
    let export_line = logs
        .lines()
        .find(|line| line.contains("Exporting session data"))
        .expect("export was logged");
    let record: serde_json::Value = serde_json::from_str(export_line).expect("json log line");

    assert_eq!(record["target"], "miapp::export");
    let data = record["fields"]["data"].as_str().expect("data field");
    let payload: serde_json::Value = serde_json::from_str(data).expect("payload is json");
    assert_eq!(payload["favorites"], serde_json::json!([3]));
    assert_eq!(payload["user"]["name"], "Usuario Demo");
}

#[test]
fn test_validation_failure_is_logged_as_warning() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::new("miapp_storefront=warn"))
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut store = default_store();
        assert!(store.dispatch(Event::SubmitContactForm).is_err());
    });

    let logs = captured.contents();
    assert!(logs.contains("WARN"));
    assert!(logs.contains("Contact form rejected"));
}

#[test]
fn test_dispatch_span_omits_form_input() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_span_events(FmtSpan::NEW)
        .with_env_filter(tracing_subscriber::EnvFilter::new("miapp_storefront=trace"))
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut store = default_store();
        store
            .dispatch(Event::ContactFieldChanged {
                field: ContactField::Email,
                value: "ana.privada@example.com".to_string(),
            })
            .expect("never fails");
    });

    let logs = captured.contents();
    assert!(logs.contains("contact_field_changed"), "span names the event: {logs}");
    assert!(!logs.contains("ana.privada"), "typed input leaked: {logs}");
}
