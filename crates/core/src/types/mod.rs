//! Core types for MiApp.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod filter;
pub mod id;
pub mod modal;
pub mod price;

pub use email::{Email, EmailError};
pub use filter::PriceFilter;
pub use id::*;
pub use modal::{Modal, Theme};
pub use price::{CurrencyCode, Price, PriceError};
