//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MIAPP_CURRENCY` - ISO code the demo catalog is priced in (default: EUR)
//! - `MIAPP_DEMO_USER_NAME` - Name of the mock login user (default: Usuario Demo)
//! - `MIAPP_DEMO_USER_EMAIL` - Email of the mock login user (default: demo@miapp.com)
//! - `MIAPP_SEED_NOTIFICATIONS` - Start sessions with the welcome
//!   notifications, `true` or `false` (default: true)

use std::str::FromStr;

use thiserror::Error;

use miapp_core::{CurrencyCode, Email};

use crate::models::User;

const DEFAULT_DEMO_USER_NAME: &str = "Usuario Demo";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Currency of the demo catalog and the cart.
    pub currency: CurrencyCode,
    /// The user a mock login signs in as.
    pub demo_user: User,
    /// Whether new sessions start with the welcome notifications.
    pub seed_notifications: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            demo_user: User {
                name: DEFAULT_DEMO_USER_NAME.to_string(),
                email: Email::demo(),
            },
            seed_notifications: true,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from a variable lookup, applying defaults.
    ///
    /// `from_vars(|_| None)` yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let currency = CurrencyCode::from_str(&get_or_default("MIAPP_CURRENCY", "EUR"))
            .map_err(|e| ConfigError::InvalidEnvVar("MIAPP_CURRENCY".to_string(), e.to_string()))?;

        let name = get_or_default("MIAPP_DEMO_USER_NAME", DEFAULT_DEMO_USER_NAME);
        if name.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "MIAPP_DEMO_USER_NAME".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let email = Email::parse(&get_or_default(
            "MIAPP_DEMO_USER_EMAIL",
            Email::DEMO,
        ))
        .map_err(|e| ConfigError::InvalidEnvVar("MIAPP_DEMO_USER_EMAIL".to_string(), e.to_string()))?;

        let seed_notifications = parse_bool(
            "MIAPP_SEED_NOTIFICATIONS",
            &get_or_default("MIAPP_SEED_NOTIFICATIONS", "true"),
        )?;

        Ok(Self {
            currency,
            demo_user: User { name, email },
            seed_notifications,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a boolean flag, accepting the usual spellings.
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected true or false, got {other:?}"),
        )),
    }
}
