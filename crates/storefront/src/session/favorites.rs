//! Favorite products.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use miapp_core::ProductId;

/// Set of favorited product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(BTreeSet<ProductId>);

impl Favorites {
    /// Add `id` if absent, remove it otherwise.
    ///
    /// Returns whether the product is a favorite afterwards.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.0.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_set() {
        let mut favorites = Favorites::default();
        favorites.toggle(ProductId::new(1));
        let before = favorites.clone();

        assert!(favorites.toggle(ProductId::new(3)));
        assert!(!favorites.toggle(ProductId::new(3)));
        assert_eq!(favorites, before);
    }

    #[test]
    fn test_no_duplicates() {
        let mut favorites = Favorites::default();
        favorites.toggle(ProductId::new(2));
        favorites.toggle(ProductId::new(4));
        favorites.toggle(ProductId::new(2));
        favorites.toggle(ProductId::new(2));

        assert_eq!(favorites.len(), 2);
        assert!(favorites.contains(ProductId::new(2)));
        assert_eq!(
            favorites.iter().map(|id| id.get()).collect::<Vec<_>>(),
            vec![2, 4]
        );
    }
}
