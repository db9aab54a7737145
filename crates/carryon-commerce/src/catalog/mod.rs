//! Product catalog module.
//!
//! Contains the product type, the static dataset, and the selected-product
//! record.

mod dataset;
mod product;
mod selection;

pub use dataset::{
    luggage_sets, luggages_without_sets, search_by_name, Catalog, Dataset,
    DEFAULT_RECOMMENDATIONS, NEW_ARRIVALS_BLOCK, SELECTED_PRODUCTS_BLOCK,
};
pub use product::{Product, ProductId, VariantKey, LUGGAGE_SETS_CATEGORY, MAX_STARS};
pub use selection::{SelectionRepository, SELECTED_PRODUCT_KEY};
