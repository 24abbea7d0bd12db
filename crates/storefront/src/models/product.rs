//! Catalog product.

use serde::{Deserialize, Serialize};

use miapp_core::{Price, ProductId};

/// A product in the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Single glyph used as the product image.
    pub image: String,
    pub description: String,
}

impl Product {
    /// Build a product from its display price string (e.g. `"99€"`).
    ///
    /// # Errors
    ///
    /// Returns an error if the price string cannot be parsed.
    pub fn from_display(
        id: u32,
        name: &str,
        price: &str,
        image: &str,
        description: &str,
    ) -> Result<Self, miapp_core::PriceError> {
        Ok(Self {
            id: ProductId::new(id),
            name: name.to_owned(),
            price: price.parse()?,
            image: image.to_owned(),
            description: description.to_owned(),
        })
    }
}
