//! Static product catalog and the catalog filter.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use miapp_core::{CurrencyCode, Price, PriceError, PriceFilter, ProductId};

use crate::models::Product;

/// Demo products as `(id, name, whole amount, image, description)`.
const DEMO_PRODUCTS: [(u32, &str, i64, &str, &str); 4] = [
    (1, "Producto Premium", 99, "🎨", "Diseño profesional"),
    (2, "Servicio Pro", 149, "💼", "Consultoría experta"),
    (3, "Pack Completo", 199, "📦", "Todo incluido"),
    (4, "Básico", 49, "⭐", "Para empezar"),
];

/// Errors raised while assembling a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A product has no name.
    #[error("product {0} has an empty name")]
    EmptyName(ProductId),

    /// Products are priced in different currencies.
    #[error("product {id} is priced in {found}, catalog uses {expected}")]
    MixedCurrency {
        id: ProductId,
        expected: CurrencyCode,
        found: CurrencyCode,
    },

    /// A display price could not be parsed.
    #[error("invalid price: {0}")]
    Price(#[from] PriceError),
}

/// The read-only product catalog.
///
/// All products share one currency, so cart totals never mix currencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    currency: CurrencyCode,
}

impl Catalog {
    /// Build a catalog, checking ids, names and currencies.
    ///
    /// An empty catalog uses the default currency.
    ///
    /// # Errors
    ///
    /// Returns an error on a duplicate id, an empty name, or mixed currencies.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let currency = products
            .first()
            .map_or_else(CurrencyCode::default, |p| p.price.currency());

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.name.is_empty() {
                return Err(CatalogError::EmptyName(product.id));
            }
            if product.price.currency() != currency {
                return Err(CatalogError::MixedCurrency {
                    id: product.id,
                    expected: currency,
                    found: product.price.currency(),
                });
            }
        }

        Ok(Self { products, currency })
    }

    /// The four-product demo catalog shown on the landing page, in euros.
    ///
    /// # Errors
    ///
    /// Never fails in practice; see [`Catalog::demo_in`].
    pub fn demo() -> Result<Self, CatalogError> {
        Self::demo_in(CurrencyCode::EUR)
    }

    /// The demo catalog with its amounts priced in `currency`.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the error path is catalog validation.
    pub fn demo_in(currency: CurrencyCode) -> Result<Self, CatalogError> {
        let products = DEMO_PRODUCTS
            .iter()
            .map(|&(id, name, amount, image, description)| Product {
                id: ProductId::new(id),
                name: name.to_owned(),
                price: Price::new(Decimal::from(amount), currency),
                image: image.to_owned(),
                description: description.to_owned(),
            })
            .collect();
        Self::new(products)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Currency every product is priced in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products visible under `filter`, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&Product> {
        filter_products(&self.products, &filter.search_term, filter.price_filter)
    }
}

/// Search term and price bucket chosen in the product section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub search_term: String,
    pub price_filter: PriceFilter,
}

impl CatalogFilter {
    /// Whether `product` passes both the search and the price bucket.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        name_matches(&product.name, &self.search_term.to_lowercase())
            && self.price_filter.matches(&product.price)
    }
}

/// Products whose name contains `search_term` (case-insensitive) and whose
/// price falls in `price_filter`.
#[must_use]
pub fn filter_products<'a>(
    products: &'a [Product],
    search_term: &str,
    price_filter: PriceFilter,
) -> Vec<&'a Product> {
    let needle = search_term.to_lowercase();
    products
        .iter()
        .filter(|p| name_matches(&p.name, &needle) && price_filter.matches(&p.price))
        .collect()
}

fn name_matches(name: &str, lowercase_needle: &str) -> bool {
    name.to_lowercase().contains(lowercase_needle)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_demo_catalog() {
        let catalog = Catalog::demo().unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.currency(), CurrencyCode::EUR);
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().name, "Servicio Pro");
        assert!(catalog.get(ProductId::new(5)).is_none());
    }

    #[test]
    fn test_demo_in_other_currency() {
        let catalog = Catalog::demo_in(CurrencyCode::USD).unwrap();
        assert_eq!(catalog.currency(), CurrencyCode::USD);
        let premium = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(premium.price.to_string(), "$99");
        let mid = filter_products(catalog.products(), "", PriceFilter::Mid);
        assert_eq!(names(&mid), vec!["Servicio Pro"]);
    }

    #[test]
    fn test_search_and_mid_bucket() {
        let catalog = Catalog::demo().unwrap();
        let visible = filter_products(catalog.products(), "pro", PriceFilter::Mid);
        assert_eq!(names(&visible), vec!["Servicio Pro"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::demo().unwrap();
        let visible = filter_products(catalog.products(), "PRO", PriceFilter::All);
        assert_eq!(names(&visible), vec!["Producto Premium", "Servicio Pro"]);
    }

    #[test]
    fn test_non_ascii_search() {
        let catalog = Catalog::demo().unwrap();
        let visible = filter_products(catalog.products(), "bási", PriceFilter::All);
        assert_eq!(names(&visible), vec!["Básico"]);
    }

    #[test]
    fn test_empty_search_with_buckets() {
        let catalog = Catalog::demo().unwrap();
        let low = filter_products(catalog.products(), "", PriceFilter::Low);
        let high = filter_products(catalog.products(), "", PriceFilter::High);
        assert_eq!(names(&low), vec!["Producto Premium", "Básico"]);
        assert_eq!(names(&high), vec!["Pack Completo"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let catalog = Catalog::demo().unwrap();
        let filter = CatalogFilter {
            search_term: "zapatos".to_string(),
            price_filter: PriceFilter::All,
        };
        assert!(catalog.filter(&filter).is_empty());
    }

    #[test]
    fn test_filter_struct_agrees_with_function() {
        let catalog = Catalog::demo().unwrap();
        let filter = CatalogFilter {
            search_term: "pack".to_string(),
            price_filter: PriceFilter::High,
        };
        let product = catalog.get(ProductId::new(3)).unwrap();
        assert!(filter.matches(product));
        assert_eq!(names(&catalog.filter(&filter)), vec!["Pack Completo"]);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let a = Product::from_display(1, "A", "1€", "a", "").unwrap();
        let b = Product::from_display(1, "B", "2€", "b", "").unwrap();
        assert!(matches!(
            Catalog::new(vec![a, b]),
            Err(CatalogError::DuplicateId(id)) if id == ProductId::new(1)
        ));
    }

    #[test]
    fn test_rejects_mixed_currency() {
        let a = Product::from_display(1, "A", "1€", "a", "").unwrap();
        let b = Product::from_display(2, "B", "$2", "b", "").unwrap();
        assert!(matches!(
            Catalog::new(vec![a, b]),
            Err(CatalogError::MixedCurrency { found: CurrencyCode::USD, .. })
        ));
    }

    #[test]
    fn test_rejects_empty_name() {
        let a = Product::from_display(1, "", "1€", "a", "").unwrap();
        assert!(matches!(
            Catalog::new(vec![a]),
            Err(CatalogError::EmptyName(_))
        ));
    }
}
