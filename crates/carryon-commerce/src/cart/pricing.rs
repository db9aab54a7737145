//! Cart pricing calculations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{cart_item_count, CartEntry};
use crate::money::Money;

/// Flat shipping charged on every order.
pub const SHIPPING_FLAT: Money = Money::from_units(30);

/// Subtotal at which the order discount starts to apply (inclusive).
pub const DISCOUNT_THRESHOLD: Money = Money::from_units(3000);

/// Order discount, in percent of the subtotal.
pub const DISCOUNT_PERCENT: u32 = 10;

/// Price breakdown for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of price × quantity.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping: Money,
    /// Order discount, when the subtotal qualifies.
    pub discount: Option<Money>,
    /// Amount due.
    pub total: Money,
}

impl CartSummary {
    /// Check if the discount applies.
    pub fn has_discount(&self) -> bool {
        self.discount.is_some()
    }

    /// Get the savings from the discount.
    pub fn savings(&self) -> Money {
        self.discount.unwrap_or_default()
    }
}

/// Summarize `entries`.
///
/// Shipping is always [`SHIPPING_FLAT`]. A subtotal of at least
/// [`DISCOUNT_THRESHOLD`] earns [`DISCOUNT_PERCENT`] off the subtotal; the
/// discount never applies to shipping.
pub fn compute_summary(entries: &[CartEntry]) -> CartSummary {
    let subtotal: Money = entries.iter().map(CartEntry::line_total).sum();
    let discount = (subtotal >= DISCOUNT_THRESHOLD).then(|| subtotal.percentage(DISCOUNT_PERCENT));
    let total = subtotal - discount.unwrap_or_default() + SHIPPING_FLAT;

    CartSummary {
        subtotal,
        shipping: SHIPPING_FLAT,
        discount,
        total,
    }
}

/// What the header badge shows for the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "count", rename_all = "lowercase")]
pub enum CartBadge {
    /// Empty cart: no badge.
    Hidden,
    /// Badge with the total unit count.
    Visible(u64),
}

impl CartBadge {
    /// Badge for a given unit count.
    pub fn from_count(count: u64) -> Self {
        if count == 0 {
            CartBadge::Hidden
        } else {
            CartBadge::Visible(count)
        }
    }

    /// Badge for `entries`.
    pub fn for_entries(entries: &[CartEntry]) -> Self {
        Self::from_count(cart_item_count(entries))
    }
}

/// Confirmation of a completed checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    pub placed_at: DateTime<Utc>,
    pub entries: Vec<CartEntry>,
    pub summary: CartSummary,
}
