//! Domain models held in the session.
//!
//! These are validated domain objects; the view renderer receives them by
//! reference through session snapshots.

pub mod contact;
pub mod notification;
pub mod product;
pub mod user;

pub use contact::{ContactError, ContactField, ContactForm};
pub use notification::Notification;
pub use product::Product;
pub use user::User;
