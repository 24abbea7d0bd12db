//! The session store.
//!
//! [`SessionStore`] owns the [`SessionState`] and is the only thing that
//! changes it. The view renderer calls [`SessionStore::dispatch`] with one
//! [`Event`] per interaction and redraws from [`SessionStore::subscribe`].
//!
//! State lives inside a `tokio::sync::watch` channel: each change bumps the
//! channel version, so subscribers see exactly one update per effective
//! transition and never observe a half-applied event. Events that change
//! nothing (removing an absent line, re-reading a read notification, a
//! rejected form) leave the version untouched.

use std::fmt;

use serde_json::Value;
use tokio::sync::watch;
use tracing::instrument;

use miapp_core::{Modal, NotificationId, Price, PriceFilter, ProductId};

use crate::catalog::Catalog;
use crate::clock::{Clock, SystemClock};
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::export::{DiagnosticSink, ExportedData, TracingSink};
use crate::models::{ContactField, Product};
use crate::session::SessionState;

const MESSAGE_SENT: &str = "Mensaje enviado correctamente";
const LOGGED_IN: &str = "¡Sesión iniciada con éxito!";
const LOGGED_OUT: &str = "Sesión cerrada";

/// A named interaction coming from the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ToggleMenu,
    ToggleTheme,
    OpenModal(Modal),
    CloseModal,
    ContactFieldChanged { field: ContactField, value: String },
    SubmitContactForm,
    ToggleFavorite(ProductId),
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    MarkNotificationRead(NotificationId),
    ClearNotifications,
    Login,
    Logout,
    SearchChanged(String),
    PriceFilterChanged(PriceFilter),
    IncrementCounter,
    DecrementCounter,
    ExportData,
}

/// Confirmation the view should surface to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acknowledgement {
    /// The contact form was accepted.
    MessageSent { sender: String },
    /// Session data was written to the diagnostic sink.
    DataExported,
}

impl Event {
    /// Variant name, for logs. Carries none of the event's payload.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ToggleMenu => "toggle_menu",
            Self::ToggleTheme => "toggle_theme",
            Self::OpenModal(_) => "open_modal",
            Self::CloseModal => "close_modal",
            Self::ContactFieldChanged { .. } => "contact_field_changed",
            Self::SubmitContactForm => "submit_contact_form",
            Self::ToggleFavorite(_) => "toggle_favorite",
            Self::AddToCart(_) => "add_to_cart",
            Self::RemoveFromCart(_) => "remove_from_cart",
            Self::MarkNotificationRead(_) => "mark_notification_read",
            Self::ClearNotifications => "clear_notifications",
            Self::Login => "login",
            Self::Logout => "logout",
            Self::SearchChanged(_) => "search_changed",
            Self::PriceFilterChanged(_) => "price_filter_changed",
            Self::IncrementCounter => "increment_counter",
            Self::DecrementCounter => "decrement_counter",
            Self::ExportData => "export_data",
        }
    }
}

impl fmt::Display for Acknowledgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MessageSent { sender } => write!(f, "¡Mensaje enviado por {sender}! 📧"),
            Self::DataExported => write!(f, "Datos exportados"),
        }
    }
}

/// Owner of one session's state.
pub struct SessionStore {
    state: watch::Sender<SessionState>,
    catalog: Catalog,
    config: StorefrontConfig,
    clock: Box<dyn Clock>,
    sink: Box<dyn DiagnosticSink>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &*self.state.borrow())
            .field("catalog", &self.catalog)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Start a session over the demo catalog priced in the configured
    /// currency, using the system clock and logging exports through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns an error if the demo catalog cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let catalog = Catalog::demo_in(config.currency)?;
        Ok(Self::with_catalog(config, catalog, SystemClock))
    }

    /// Start a session over `catalog` with an explicit clock.
    #[must_use]
    pub fn with_catalog(
        config: StorefrontConfig,
        catalog: Catalog,
        clock: impl Clock + 'static,
    ) -> Self {
        let mut initial = SessionState::new(catalog.currency());
        if config.seed_notifications {
            initial.seed_welcome(clock.now());
        }
        let (state, _) = watch::channel(initial);

        tracing::debug!(products = catalog.len(), "Session started");

        Self {
            state,
            catalog,
            config,
            clock: Box::new(clock),
            sink: Box::new(TracingSink),
        }
    }

    /// Replace the export destination.
    #[must_use]
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Receive a fresh snapshot after every effective state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Apply one view event.
    ///
    /// Returns an acknowledgement for events that have one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Contact`] when the contact form has empty fields and
    /// [`AppError::UnknownProduct`] when adding a product outside the
    /// catalog. The state is unchanged in both cases.
    #[instrument(skip(self, event), fields(event = event.name()))]
    pub fn dispatch(&mut self, event: Event) -> Result<Option<Acknowledgement>> {
        match event {
            Event::ToggleMenu => {
                self.toggle_menu();
            }
            Event::ToggleTheme => {
                self.toggle_theme();
            }
            Event::OpenModal(modal) => self.set_active_modal(Some(modal)),
            Event::CloseModal => self.set_active_modal(None),
            Event::ContactFieldChanged { field, value } => self.set_contact_field(field, value),
            Event::SubmitContactForm => return self.submit_contact_form().map(Some),
            Event::ToggleFavorite(id) => {
                self.toggle_favorite(id);
            }
            Event::AddToCart(id) => {
                self.add_to_cart(id)?;
            }
            Event::RemoveFromCart(id) => {
                self.remove_from_cart(id);
            }
            Event::MarkNotificationRead(id) => {
                self.mark_notification_read(id);
            }
            Event::ClearNotifications => self.clear_notifications(),
            Event::Login => self.login(),
            Event::Logout => self.logout(),
            Event::SearchChanged(term) => self.set_search_term(term),
            Event::PriceFilterChanged(filter) => self.set_price_filter(filter),
            Event::IncrementCounter => {
                self.increment_counter();
            }
            Event::DecrementCounter => {
                self.decrement_counter();
            }
            Event::ExportData => return Ok(Some(self.export_data())),
        }
        Ok(None)
    }

    // =========================================================================
    // Header and page chrome
    // =========================================================================

    /// Flip the mobile menu. Returns whether it is now open.
    pub fn toggle_menu(&mut self) -> bool {
        let mut open = false;
        self.state.send_modify(|state| {
            state.menu_open = !state.menu_open;
            open = state.menu_open;
        });
        open
    }

    /// Flip between light and dark. Returns whether dark mode is now on.
    pub fn toggle_theme(&mut self) -> bool {
        let mut dark = false;
        self.state.send_modify(|state| {
            state.theme = state.theme.toggled();
            dark = state.theme.is_dark();
        });
        tracing::debug!(dark, "Theme toggled");
        dark
    }

    /// Show `modal`, replacing any other, or close the current one.
    pub fn set_active_modal(&mut self, modal: Option<Modal>) {
        self.state.send_if_modified(|state| {
            let changed = state.active_modal != modal;
            state.active_modal = modal;
            changed
        });
    }

    /// Step the demo counter up. Returns the new value.
    pub fn increment_counter(&mut self) -> i64 {
        self.step_counter(1)
    }

    /// Step the demo counter down. Returns the new value.
    pub fn decrement_counter(&mut self) -> i64 {
        self.step_counter(-1)
    }

    fn step_counter(&mut self, delta: i64) -> i64 {
        let mut value = 0;
        self.state.send_if_modified(|state| {
            let next = state.counter.saturating_add(delta);
            let changed = next != state.counter;
            state.counter = next;
            value = next;
            changed
        });
        value
    }

    // =========================================================================
    // Contact form
    // =========================================================================

    /// Update one contact form field as the visitor types.
    pub fn set_contact_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        self.state.send_if_modified(|state| {
            if state.contact.get(field) == value {
                return false;
            }
            state.contact.set(field, value);
            true
        });
    }

    /// Submit the contact form.
    ///
    /// On success the form is cleared and a confirmation notification is
    /// added.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Contact`] naming the empty fields; nothing changes.
    #[instrument(skip(self))]
    pub fn submit_contact_form(&mut self) -> Result<Acknowledgement> {
        if let Err(err) = self.state.borrow().contact.validate() {
            tracing::warn!(error = ?err, "Contact form rejected");
            return Err(err.into());
        }

        let now = self.clock.now();
        let mut sender = String::new();
        self.state.send_modify(|state| {
            sender = std::mem::take(&mut state.contact.name);
            state.contact.clear();
            state.notifications.push(MESSAGE_SENT, now);
        });

        tracing::info!(sender = %sender, "Contact message sent");
        Ok(Acknowledgement::MessageSent { sender })
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Add or remove `id` from favorites. Returns whether it is now a
    /// favorite.
    pub fn toggle_favorite(&mut self, id: ProductId) -> bool {
        let mut favorite = false;
        self.state.send_modify(|state| {
            favorite = state.favorites.toggle(id);
        });
        tracing::debug!(product_id = %id, favorite, "Favorite toggled");
        favorite
    }

    #[must_use]
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.state.borrow().favorites.contains(id)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of catalog product `id` and announce it.
    ///
    /// Returns the product's new quantity in the cart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownProduct`] if `id` is not in the catalog and
    /// [`AppError::Price`] if the cart total would overflow.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<u32> {
        let Some(product) = self.catalog.get(id) else {
            tracing::warn!(product_id = %id, "Add to cart for unknown product");
            return Err(AppError::UnknownProduct(id));
        };

        let now = self.clock.now();
        let mut added = Ok(0);
        self.state.send_if_modified(|state| {
            added = state.cart.add(product);
            if added.is_ok() {
                state
                    .notifications
                    .push(format!("{} añadido al carrito", product.name), now);
            }
            added.is_ok()
        });

        let quantity = added.inspect_err(|err| {
            tracing::warn!(product_id = %id, error = %err, "Add to cart rejected");
        })?;
        tracing::debug!(product_id = %id, quantity, "Added to cart");
        Ok(quantity)
    }

    /// Remove the cart line for `id`. Returns false if there was none.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        self.state
            .send_if_modified(|state| state.cart.remove(id).is_some())
    }

    /// Sum of price times quantity over the cart.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.state.borrow().cart.total()
    }

    /// Cart total with two decimals, e.g. `"197.00"`.
    #[must_use]
    pub fn cart_total_display(&self) -> String {
        self.cart_total().to_fixed_string()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn cart_badge(&self) -> usize {
        self.state.borrow().cart.len()
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Prepend an unread notification.
    pub fn add_notification(&mut self, text: impl Into<String>) -> NotificationId {
        let now = self.clock.now();
        let text = text.into();
        let mut id = NotificationId::new(0);
        self.state.send_modify(|state| {
            id = state.notifications.push(text, now);
        });
        id
    }

    /// Mark notification `id` as read. Returns false if it was absent or
    /// already read.
    pub fn mark_notification_read(&mut self, id: NotificationId) -> bool {
        self.state
            .send_if_modified(|state| state.notifications.mark_read(id))
    }

    /// Remove every notification.
    pub fn clear_notifications(&mut self) {
        self.state
            .send_if_modified(|state| state.notifications.clear() > 0);
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.state.borrow().notifications.unread_count()
    }

    // =========================================================================
    // Mock authentication
    // =========================================================================

    /// Sign in as the configured demo user and close the login modal.
    #[instrument(skip(self))]
    pub fn login(&mut self) {
        let now = self.clock.now();
        let user = self.config.demo_user.clone();
        self.state.send_modify(|state| {
            state.user = Some(user);
            state.notifications.push(LOGGED_IN, now);
            state.active_modal = None;
        });
        tracing::info!(email = %self.config.demo_user.email, "User logged in");
    }

    /// Sign out. Closes the profile card if it is open.
    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        let now = self.clock.now();
        self.state.send_modify(|state| {
            state.user = None;
            state.notifications.push(LOGGED_OUT, now);
            if state.active_modal == Some(Modal::Profile) {
                state.active_modal = None;
            }
        });
        tracing::info!("User logged out");
    }

    // =========================================================================
    // Catalog filter
    // =========================================================================

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.state.send_if_modified(|state| {
            if state.filter.search_term == term {
                return false;
            }
            state.filter.search_term = term;
            true
        });
    }

    pub fn set_price_filter(&mut self, filter: PriceFilter) {
        self.state.send_if_modified(|state| {
            let changed = state.filter.price_filter != filter;
            state.filter.price_filter = filter;
            changed
        });
    }

    /// Catalog products passing the current search and price filter.
    #[must_use]
    pub fn visible_products(&self) -> Vec<Product> {
        let state = self.state.borrow();
        self.catalog
            .filter(&state.filter)
            .into_iter()
            .cloned()
            .collect()
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Write favorites, cart and user to the diagnostic sink.
    #[instrument(skip(self))]
    pub fn export_data(&self) -> Acknowledgement {
        let payload = {
            let state = self.state.borrow();
            serde_json::to_value(ExportedData::from(&*state)).unwrap_or_else(|e| {
                tracing::error!(error = %e, "Failed to serialize session export");
                Value::Null
            })
        };
        self.sink.export(&payload);
        Acknowledgement::DataExported
    }
}
