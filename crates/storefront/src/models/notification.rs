//! Session notification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use miapp_core::NotificationId;

/// A message in the notification inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub text: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create an unread notification.
    #[must_use]
    pub fn unread(id: NotificationId, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            read: false,
            created_at,
        }
    }
}
