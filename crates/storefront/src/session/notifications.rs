//! Notification inbox.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use miapp_core::NotificationId;

use crate::models::Notification;

/// Notifications, newest first.
///
/// Ids come from the creation time in milliseconds, bumped past the last
/// issued id so they stay unique and strictly increasing within a session
/// even when several notifications share a millisecond.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCenter {
    items: VecDeque<Notification>,
    #[serde(skip)]
    last_id: Option<NotificationId>,
}

impl NotificationCenter {
    /// Prepend an unread notification created at `at`.
    pub fn push(&mut self, text: impl Into<String>, at: DateTime<Utc>) -> NotificationId {
        let millis = at.timestamp_millis();
        let id = match self.last_id {
            Some(last) if last.get() >= millis => NotificationId::new(last.get().saturating_add(1)),
            _ => NotificationId::new(millis),
        };
        self.push_with_id(id, text, at);
        id
    }

    /// Prepend an unread notification with a fixed id.
    ///
    /// Used for the welcome messages, which have small well-known ids.
    pub(crate) fn push_with_id(&mut self, id: NotificationId, text: impl Into<String>, at: DateTime<Utc>) {
        self.items.push_front(Notification::unread(id, text, at));
        self.last_id = Some(self.last_id.map_or(id, |last| last.max(id)));
    }

    /// Mark `id` as read. Returns true if it was found unread.
    pub fn mark_read(&mut self, id: NotificationId) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.read => {
                n.read = true;
                true
            }
            _ => false,
        }
    }

    /// Remove every notification, returning how many there were.
    ///
    /// Id issuance continues past the cleared ids.
    pub fn clear(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        count
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }
}
