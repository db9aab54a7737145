//! Storefront domain types and logic for CarryOn, a luggage shop.
//!
//! This crate provides the two engines behind the storefront:
//!
//! - **Catalog**: Products, the luggage-sets category, blocks, search by name
//! - **Search**: Filters, sort order, pagination, browsing session
//! - **Cart**: Cart entries, pricing summary, persisted cart repository
//! - **Validation**: Contact, review and login forms
//!
//! # Example
//!
//! ```rust
//! use carryon_commerce::prelude::*;
//! use carryon_storage::MemoryStore;
//!
//! let catalog = Catalog::from_json(
//!     r#"{"data": [
//!         {"name": "Trolley Bag", "price": 250, "category": "carry-on",
//!          "size": "M", "color": "black", "salesStatus": false,
//!          "rating": 4.5, "popularity": 80, "imageUrl": "img/trolley.png"}
//!     ]}"#,
//! )
//! .unwrap();
//!
//! // Browse the first page, cheapest first
//! let session = BrowseSession::new().with_sort(Some(SortKey::PriceLow));
//! let page = session.view(catalog.products());
//! assert_eq!(page.len(), 1);
//!
//! // Put the bag in the cart twice
//! let cart = CartRepository::new(MemoryStore::new());
//! cart.add_to_cart(page.items[0]).unwrap();
//! let summary = cart.add_to_cart(page.items[0]).unwrap().summary();
//! println!("Total: {}", summary.total.display());
//! ```

pub mod error;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod validation;

pub use error::CommerceError;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        luggage_sets, luggages_without_sets, search_by_name, Catalog, Product, ProductId,
        SelectionRepository, VariantKey, LUGGAGE_SETS_CATEGORY,
    };

    // Search
    pub use crate::search::{
        filter_catalog, paginate, sort_catalog, BrowseEvent, BrowseSession, CatalogPage,
        FilterState, Pagination, SortKey, PAGE_SIZE,
    };

    // Cart
    pub use crate::cart::{
        cart_item_count, compute_summary, Cart, CartBadge, CartEntry, CartRepository,
        CartSummary, Receipt,
    };

    // Validation
    pub use crate::validation::{ContactForm, FieldError, LoginForm, ReviewForm};
}
