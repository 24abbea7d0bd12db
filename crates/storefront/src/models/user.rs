//! User domain types.

use serde::{Deserialize, Serialize};

use miapp_core::Email;

/// The logged-in user of the current session.
///
/// Login is simulated: the only user ever created is the configured demo
/// user, so there is no id or credential here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name shown in the header and profile card.
    pub name: String,
    /// Contact address shown in the profile card.
    pub email: Email,
}
