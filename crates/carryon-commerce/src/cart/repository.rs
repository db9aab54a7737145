//! Persisted cart.

use carryon_storage::{Cache, KvStore};

use crate::cart::{Cart, CartEntry, Receipt};
use crate::catalog::{Product, VariantKey};
use crate::error::CommerceError;

/// Store key holding the serialized cart entries.
pub const CART_KEY: &str = "cart";

/// Loads and saves the cart, and runs each cart operation as one
/// read-modify-write against the store.
///
/// # Example
///
/// ```rust
/// use carryon_commerce::prelude::*;
/// use carryon_storage::MemoryStore;
///
/// let repo = CartRepository::new(MemoryStore::new());
/// let bag = Product::new("Trolley Bag", Money::from_units(250), "carry-on");
///
/// repo.add_to_cart(&bag).unwrap();
/// let cart = repo.add_to_cart(&bag).unwrap();
/// assert_eq!(cart.item_count(), 2);
/// ```
#[derive(Debug)]
pub struct CartRepository<S> {
    cache: Cache<S>,
}

impl<S: KvStore> CartRepository<S> {
    /// Create a repository over `store`.
    pub fn new(store: S) -> Self {
        Self {
            cache: Cache::new(store),
        }
    }

    /// Current cart.
    ///
    /// Never fails: a missing key is an empty cart, and so is a stored
    /// value that can't be read or parsed.
    pub fn load(&self) -> Cart {
        match self.cache.get::<Vec<CartEntry>>(CART_KEY) {
            Ok(Some(entries)) => Cart::from_entries(entries),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "stored cart is unreadable, starting with an empty cart");
                Cart::new()
            }
        }
    }

    /// Persist `cart`, replacing what was stored.
    pub fn save(&self, cart: &Cart) -> Result<(), CommerceError> {
        self.cache.set(CART_KEY, cart.entries())?;
        Ok(())
    }

    fn update<R>(&self, f: impl FnOnce(&mut Cart) -> R) -> Result<(Cart, R), CommerceError> {
        let mut cart = self.load();
        let outcome = f(&mut cart);
        self.save(&cart)?;
        Ok((cart, outcome))
    }

    /// Add one unit of `product`. Returns the updated cart.
    pub fn add_to_cart(&self, product: &Product) -> Result<Cart, CommerceError> {
        let (cart, quantity) = self.update(|cart| cart.add(product))?;
        tracing::debug!(product = %product.name, quantity, "added to cart");
        Ok(cart)
    }

    /// Add `quantity` units of `product`. Returns the updated cart.
    pub fn add_quantity(&self, product: &Product, quantity: u32) -> Result<Cart, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        let (cart, added) = self.update(|cart| cart.add_quantity(product, quantity))?;
        let total = added?;
        tracing::debug!(product = %product.name, quantity = total, "added to cart");
        Ok(cart)
    }

    /// Take one unit of `key` out of the cart. Unknown variants are a no-op.
    pub fn decrement_or_remove(&self, key: &VariantKey) -> Result<Cart, CommerceError> {
        let (cart, changed) = self.update(|cart| cart.decrement_or_remove(key))?;
        tracing::debug!(variant = %key, changed, "decremented cart entry");
        Ok(cart)
    }

    /// Remove every entry for `key`. Returns the updated cart.
    pub fn remove_all_matching(&self, key: &VariantKey) -> Result<Cart, CommerceError> {
        let (cart, removed) = self.update(|cart| cart.remove_all_matching(key))?;
        tracing::debug!(variant = %key, removed, "removed cart entries");
        Ok(cart)
    }

    /// Empty the cart by deleting the stored value.
    pub fn clear_cart(&self) -> Result<Cart, CommerceError> {
        self.cache.delete(CART_KEY)?;
        tracing::debug!("cleared cart");
        Ok(Cart::new())
    }

    /// Check out the stored cart and clear it.
    ///
    /// An empty cart is an error and nothing is written.
    pub fn checkout(&self) -> Result<Receipt, CommerceError> {
        let mut cart = self.load();
        let receipt = cart.checkout()?;
        self.clear_cart()?;
        tracing::info!(
            items = receipt.entries.len(),
            total = %receipt.summary.total,
            "order placed"
        );
        Ok(receipt)
    }
}
