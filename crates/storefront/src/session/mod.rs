//! Session state: everything the page shows that can change.
//!
//! A [`SessionState`] value is the snapshot handed to the view renderer.
//! It is only mutated by [`crate::store::SessionStore`].

pub mod cart;
pub mod favorites;
pub mod notifications;

use chrono::{DateTime, Utc};
use serde::Serialize;

use miapp_core::{CurrencyCode, Modal, NotificationId, Theme};

use crate::catalog::CatalogFilter;
use crate::models::{ContactForm, User};

pub use cart::{Cart, CartLine};
pub use favorites::Favorites;
pub use notifications::NotificationCenter;

/// Welcome messages a new session starts with, top first.
pub const WELCOME_NOTIFICATIONS: [&str; 2] =
    ["Bienvenido a MiApp", "Nueva actualización disponible"];

/// Complete state of one browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    /// Mobile navigation menu expanded.
    pub menu_open: bool,
    /// The single overlay on screen, if any.
    pub active_modal: Option<Modal>,
    pub contact: ContactForm,
    pub favorites: Favorites,
    pub theme: Theme,
    pub cart: Cart,
    pub filter: CatalogFilter,
    pub notifications: NotificationCenter,
    /// Present only while logged in.
    pub user: Option<User>,
    /// Demo counter in the hero section.
    pub counter: i64,
}

impl SessionState {
    /// A fresh session for a catalog priced in `currency`.
    #[must_use]
    pub fn new(currency: CurrencyCode) -> Self {
        Self {
            menu_open: false,
            active_modal: None,
            contact: ContactForm::default(),
            favorites: Favorites::default(),
            theme: Theme::default(),
            cart: Cart::new(currency),
            filter: CatalogFilter::default(),
            notifications: NotificationCenter::default(),
            user: None,
            counter: 0,
        }
    }

    /// Seed the welcome notifications.
    ///
    /// They get ids 2 (top) and 1 so the inbox stays ordered newest first.
    pub(crate) fn seed_welcome(&mut self, at: DateTime<Utc>) {
        for (id, text) in (1..).zip(WELCOME_NOTIFICATIONS.iter().rev()) {
            self.notifications
                .push_with_id(NotificationId::new(id), *text, at);
        }
    }

    /// The overlay the view should draw.
    ///
    /// The profile card needs a user, so it is hidden while logged out.
    #[must_use]
    pub fn visible_modal(&self) -> Option<Modal> {
        match self.active_modal {
            Some(Modal::Profile) if self.user.is_none() => None,
            other => other,
        }
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}
