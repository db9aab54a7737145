//! The "currently selected product" record.
//!
//! Bridges a catalog listing to the product detail view.

use carryon_storage::{Cache, KvStore};

use crate::catalog::Product;
use crate::error::CommerceError;

/// Store key holding the selected product.
pub const SELECTED_PRODUCT_KEY: &str = "selected-product";

/// Persists the single product the shopper last opened.
#[derive(Debug)]
pub struct SelectionRepository<S> {
    cache: Cache<S>,
}

impl<S: KvStore> SelectionRepository<S> {
    /// Create a repository over `store`.
    pub fn new(store: S) -> Self {
        Self {
            cache: Cache::new(store),
        }
    }

    /// Remember `product` as the one to show in detail.
    pub fn select(&self, product: &Product) -> Result<(), CommerceError> {
        self.cache.set(SELECTED_PRODUCT_KEY, product)?;
        tracing::debug!(product = %product.name, "selected product");
        Ok(())
    }

    /// The selected product, if any.
    ///
    /// A missing, unreadable or malformed record is treated as no selection.
    pub fn selected(&self) -> Option<Product> {
        match self.cache.get::<Product>(SELECTED_PRODUCT_KEY) {
            Ok(product) => product,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable selected product");
                None
            }
        }
    }

    /// Forget the selection.
    pub fn clear(&self) -> Result<(), CommerceError> {
        self.cache.delete(SELECTED_PRODUCT_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use carryon_storage::MemoryStore;

    #[test]
    fn test_select_and_read_back() {
        let repo = SelectionRepository::new(MemoryStore::new());
        assert!(repo.selected().is_none());

        let product = Product::new("Trolley Bag", Money::from_units(250), "carry-on");
        repo.select(&product).unwrap();
        assert_eq!(repo.selected(), Some(product));

        repo.clear().unwrap();
        assert!(repo.selected().is_none());
    }

    #[test]
    fn test_malformed_selection_is_none() {
        let store = MemoryStore::new();
        store.set_raw(SELECTED_PRODUCT_KEY, "not json").unwrap();

        let repo = SelectionRepository::new(&store);
        assert!(repo.selected().is_none());
    }
}
