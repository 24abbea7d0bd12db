//! MiApp Storefront - in-memory session store for the single-page site.
//!
//! The page itself (markup, styling, routing by anchor) is drawn by an
//! external renderer. This crate holds everything that renderer reads and
//! every transition its buttons and inputs trigger.
//!
//! # Architecture
//!
//! - [`store::SessionStore`] owns the session and applies [`store::Event`]s
//! - [`session::SessionState`] is the snapshot published after each change
//! - [`catalog::Catalog`] is the static product list plus the filter logic
//! - [`export::DiagnosticSink`] receives the "export data" dump
//!
//! Nothing is persisted and nothing talks to a server.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod session;
pub mod store;

pub use catalog::{Catalog, CatalogFilter, filter_products};
pub use config::StorefrontConfig;
pub use error::{AppError, Result};
pub use session::SessionState;
pub use store::{Acknowledgement, Event, SessionStore};
