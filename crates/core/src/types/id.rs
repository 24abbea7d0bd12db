//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around the given integer type with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - Conversion methods: `new()`, `get()`
/// - `From` conversions to and from the underlying integer
///
/// # Example
///
/// ```rust
/// # use miapp_core::define_id;
/// define_id!(WishlistId: u32);
/// define_id!(ReviewId: u32);
///
/// let wishlist_id = WishlistId::new(1);
/// let review_id = ReviewId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: WishlistId = review_id;
/// # assert_eq!(wishlist_id.get(), review_id.get());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident: $repr:ty) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name($repr);

        impl $name {
            /// Create a new ID from its raw value.
            #[must_use]
            pub const fn new(id: $repr) -> Self {
                Self(id)
            }

            /// Get the underlying raw value.
            #[must_use]
            pub const fn get(&self) -> $repr {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$repr> for $name {
            fn from(id: $repr) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $repr {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Catalog products are numbered from 1 in the static catalog.
define_id!(ProductId: u32);

// Notification ids are millisecond timestamps, bumped to stay unique.
define_id!(NotificationId: i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_order_by_raw_value() {
        assert!(NotificationId::new(1) < NotificationId::new(2));
        assert!(ProductId::new(4) > ProductId::new(3));
    }

    #[test]
    fn test_display_and_conversions() {
        let id = ProductId::from(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(u32::from(id), 7);
        assert_eq!(NotificationId::new(1_700_000_000_000).get(), 1_700_000_000_000);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_serializes_transparently() {
        let json = serde_json::to_string(&ProductId::new(2)).unwrap();
        assert_eq!(json, "2");
    }
}
