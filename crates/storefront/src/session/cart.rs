//! Shopping cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use miapp_core::{CurrencyCode, Price, PriceError, ProductId};

use crate::models::Product;

/// One product in the cart with its quantity.
///
/// Serializes as the product fields plus `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Price times quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the product does not fit.
    pub fn subtotal(&self) -> Result<Price, PriceError> {
        self.product.price.checked_times(self.quantity)
    }
}

/// The session cart: one line per distinct product, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    currency: CurrencyCode,
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart accepting products priced in `currency`.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self {
            currency,
            lines: Vec::new(),
        }
    }

    /// Add one unit of `product`, returning its new quantity.
    ///
    /// A product already in the cart has its quantity bumped; otherwise a new
    /// line with quantity 1 is appended.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::CurrencyMismatch`] if the product is priced in a
    /// different currency than the cart, and [`PriceError::Overflow`] if one
    /// more unit would push the total out of range. The cart is unchanged on
    /// error.
    pub fn add(&mut self, product: &Product) -> Result<u32, PriceError> {
        if product.price.currency() != self.currency {
            return Err(PriceError::CurrencyMismatch {
                expected: self.currency,
                found: product.price.currency(),
            });
        }
        self.checked_total()?.checked_add(&product.price)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return Ok(line.quantity);
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity: 1,
        });
        Ok(1)
    }

    /// Remove the line for `id`, if present.
    pub fn remove(&mut self, id: ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.product.id == id)?;
        Some(self.lines.remove(index))
    }

    /// Sum of every line's subtotal.
    ///
    /// Saturates instead of overflowing. [`Cart::add`] keeps the exact total
    /// in range, so only a cart deserialized from outside can saturate.
    #[must_use]
    pub fn total(&self) -> Price {
        let amount = self.lines.iter().fold(Decimal::ZERO, |acc, line| {
            acc.saturating_add(
                line.product
                    .price
                    .amount()
                    .saturating_mul(Decimal::from(line.quantity)),
            )
        });
        Price::new(amount, self.currency)
    }

    /// Exact sum of every line's subtotal.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the sum does not fit.
    pub fn checked_total(&self) -> Result<Price, PriceError> {
        self.lines
            .iter()
            .try_fold(Price::zero(self.currency), |acc, line| {
                acc.checked_add(&line.subtotal()?)
            })
    }

    /// Quantity of `id` in the cart, 0 if absent.
    #[must_use]
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product.id == id)
            .map_or(0, |l| l.quantity)
    }

    /// Number of distinct lines (the header badge).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }
}
