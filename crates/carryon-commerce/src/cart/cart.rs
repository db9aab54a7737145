//! Cart and cart entry types.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::cart::{compute_summary, CartSummary, Receipt};
use crate::catalog::{Product, VariantKey};
use crate::error::CommerceError;
use crate::money::Money;

/// A product variant in the cart with its quantity.
///
/// Persisted flat: every product field plus `quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1 inside a [`Cart`].
    pub quantity: u32,
}

impl CartEntry {
    /// Create an entry.
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Identity of this entry.
    pub fn variant_key(&self) -> VariantKey {
        self.product.variant_key()
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * i64::from(self.quantity)
    }
}

/// The shopper's cart.
///
/// Holds at most one entry per [`VariantKey`], each with quantity ≥ 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<CartEntry>", from = "Vec<CartEntry>")]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from stored entries.
    ///
    /// Entries with quantity 0 are dropped and duplicate variants are merged
    /// into the first occurrence, so hand-edited or stale state still
    /// satisfies the cart invariants.
    pub fn from_entries(entries: Vec<CartEntry>) -> Self {
        let mut cart = Self::new();
        for entry in entries {
            if entry.quantity == 0 {
                tracing::warn!(product = %entry.product.name, "dropping stored cart entry with zero quantity");
                continue;
            }
            match cart.position(&entry.product) {
                Some(index) => {
                    let existing = &mut cart.entries[index];
                    existing.quantity = existing.quantity.saturating_add(entry.quantity);
                }
                None => cart.entries.push(entry),
            }
        }
        cart
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Consume the cart and return its entries.
    pub fn into_entries(self) -> Vec<CartEntry> {
        self.entries
    }

    fn position(&self, product: &Product) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.product.is_same_variant(product))
    }

    fn position_of(&self, key: &VariantKey) -> Option<usize> {
        self.entries.iter().position(|e| key.matches(&e.product))
    }

    /// Add one unit of `product`.
    ///
    /// An existing entry for the same variant is incremented; otherwise a
    /// new entry with quantity 1 is appended. Returns the entry's new
    /// quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        match self.position(product) {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.quantity = entry.quantity.saturating_add(1);
                entry.quantity
            }
            None => {
                self.entries.push(CartEntry::new(product.clone(), 1));
                1
            }
        }
    }

    /// Add `quantity` units of `product` at once.
    pub fn add_quantity(&mut self, product: &Product, quantity: u32) -> Result<u32, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        match self.position(product) {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.quantity = entry.quantity.saturating_add(quantity);
                Ok(entry.quantity)
            }
            None => {
                self.entries.push(CartEntry::new(product.clone(), quantity));
                Ok(quantity)
            }
        }
    }

    /// Take one unit of `key` out, removing the entry when it reaches zero.
    ///
    /// Returns `false` when the variant isn't in the cart.
    pub fn decrement_or_remove(&mut self, key: &VariantKey) -> bool {
        let Some(index) = self.position_of(key) else {
            return false;
        };
        if self.entries[index].quantity <= 1 {
            self.entries.remove(index);
        } else {
            self.entries[index].quantity -= 1;
        }
        true
    }

    /// Remove every entry for `key`. Returns how many were removed.
    pub fn remove_all_matching(&mut self, key: &VariantKey) -> usize {
        let len_before = self.entries.len();
        self.entries.retain(|e| !key.matches(&e.product));
        len_before - self.entries.len()
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get an entry by variant.
    pub fn get(&self, key: &VariantKey) -> Option<&CartEntry> {
        self.position_of(key).map(|i| &self.entries[i])
    }

    /// Entries whose product name matches, ignoring case and surrounding
    /// whitespace.
    pub fn find_by_name(&self, name: &str) -> Vec<&CartEntry> {
        let needle = name.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.product.name.to_lowercase() == needle)
            .collect()
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        cart_item_count(&self.entries)
    }

    /// Get number of distinct variants.
    pub fn unique_item_count(&self) -> usize {
        self.entries.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Price summary for the current contents.
    pub fn summary(&self) -> CartSummary {
        compute_summary(&self.entries)
    }

    /// Place the order: returns a receipt and empties the cart.
    pub fn checkout(&mut self) -> Result<Receipt, CommerceError> {
        if self.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        let summary = self.summary();
        let entries = std::mem::take(&mut self.entries);
        Ok(Receipt {
            placed_at: Utc::now(),
            entries,
            summary,
        })
    }
}

impl From<Vec<CartEntry>> for Cart {
    fn from(entries: Vec<CartEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<Cart> for Vec<CartEntry> {
    fn from(cart: Cart) -> Self {
        cart.entries
    }
}

/// Total units across `entries`, shown on the cart badge.
pub fn cart_item_count(entries: &[CartEntry]) -> u64 {
    entries.iter().map(|e| u64::from(e.quantity)).sum()
}
