//! Unified error handling.
//!
//! Provides a unified `AppError` type for every fallible store operation.
//! Only [`AppError::Contact`] is meant for the visitor; everything else is a
//! wiring mistake and is reported with a generic message.

use thiserror::Error;

use miapp_core::{PriceError, ProductId};

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::models::ContactError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Contact form submitted with empty fields.
    #[error("Contact form invalid: {0}")]
    Contact(#[from] ContactError),

    /// An event referenced a product that is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// Catalog could not be assembled.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Price arithmetic failed.
    #[error("Price error: {0}")]
    Price(#[from] PriceError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Message to surface to the visitor.
    ///
    /// Internal error details are not exposed.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Contact(err) => err.to_string(),
            Self::UnknownProduct(_) => "Producto no disponible".to_string(),
            Self::Catalog(_) | Self::Price(_) | Self::Config(_) => {
                "Ha ocurrido un error, inténtalo de nuevo".to_string()
            }
        }
    }

    /// Whether the error is a validation failure the visitor can fix.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Contact(_))
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
