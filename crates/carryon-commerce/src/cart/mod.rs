//! Shopping cart module.
//!
//! Contains the cart, its pricing summary, and the persisted repository.

mod cart;
mod pricing;
mod repository;

pub use cart::{cart_item_count, Cart, CartEntry};
pub use pricing::{
    compute_summary, CartBadge, CartSummary, Receipt, DISCOUNT_PERCENT, DISCOUNT_THRESHOLD,
    SHIPPING_FLAT,
};
pub use repository::{CartRepository, CART_KEY};
