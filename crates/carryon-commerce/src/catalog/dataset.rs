//! The static product dataset and catalog-wide lookups.

use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CommerceError;

/// Home-page shelf of hand-picked products.
pub const SELECTED_PRODUCTS_BLOCK: &str = "Selected Products";

/// Home-page shelf of recent arrivals.
pub const NEW_ARRIVALS_BLOCK: &str = "New Products Arrival";

/// Default number of recommendations on a product detail view.
pub const DEFAULT_RECOMMENDATIONS: usize = 4;

/// Dataset document shape: `{ "data": [ ...products ] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub data: Vec<Product>,
}

/// The full product list, loaded once and never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products in source order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a dataset document.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Self::parse(json, "inline document")
    }

    /// Parse a dataset document, naming `source_name` in any error.
    pub fn parse(json: &str, source_name: &str) -> Result<Self, CommerceError> {
        let dataset: Dataset = serde_json::from_str(json).map_err(|e| CommerceError::Dataset {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!(source = source_name, products = dataset.data.len(), "loaded product data");
        Ok(Self::new(dataset.data))
    }

    /// Read and parse a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, &source_name),
            Err(e) => Err(CommerceError::Dataset {
                source_name,
                reason: e.to_string(),
            }),
        }
    }

    /// Fall back to an empty catalog when the dataset is unavailable.
    ///
    /// The failure is logged; there is no retry.
    pub fn or_empty(result: Result<Self, CommerceError>) -> Self {
        result.unwrap_or_else(|e| {
            tracing::error!(error = %e, "product data unavailable, showing an empty catalog");
            Self::default()
        })
    }

    /// All products in source order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products, sets included.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Regular catalog view: everything except luggage sets.
    pub fn without_sets(&self) -> Vec<&Product> {
        luggages_without_sets(&self.products)
    }

    /// The "best sets" shelf.
    pub fn luggage_sets(&self) -> Vec<&Product> {
        luggage_sets(&self.products)
    }

    /// Products featured on a home-page shelf, in source order.
    pub fn in_block(&self, block: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.in_block(block)).collect()
    }

    /// Exact name lookup across the whole catalog.
    pub fn search_by_name(&self, query: &str) -> Option<&Product> {
        search_by_name(&self.products, query)
    }

    /// Pick up to `count` random non-set products.
    pub fn recommendations<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&Product> {
        let mut pool = self.without_sets();
        pool.shuffle(rng);
        pool.truncate(count);
        pool
    }
}

/// Every product except luggage sets, order preserved.
pub fn luggages_without_sets(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| !p.is_luggage_set()).collect()
}

/// Only luggage sets, order preserved.
pub fn luggage_sets(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.is_luggage_set()).collect()
}

/// Find the product whose name equals `query`, ignoring case and
/// surrounding whitespace.
///
/// Searches every product regardless of active filters. A blank query
/// matches nothing.
pub fn search_by_name<'a>(products: &'a [Product], query: &str) -> Option<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    products.iter().find(|p| p.name.to_lowercase() == needle)
}
