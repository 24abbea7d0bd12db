//! MiApp Core - Shared types library.
//!
//! This crate provides the domain types used by the MiApp demo storefront:
//! - `storefront` - The in-memory session store driving the single-page app
//! - `integration-tests` - Cross-crate session flow tests
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no clocks,
//! no logging. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and the
//!   enums that describe view state (price filter, modal, theme)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
