//! Catalog filters.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Active catalog filters for one browsing session.
///
/// Each `None` field imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Exact size to match.
    pub size: Option<String>,
    /// Exact color to match.
    pub color: Option<String>,
    /// Exact category to match.
    pub category: Option<String>,
    /// Only discounted products.
    #[serde(rename = "salesStatus")]
    pub sales_only: bool,
}

impl FilterState {
    /// No filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by size. Blank clears the constraint.
    pub fn with_size(mut self, size: Option<impl Into<String>>) -> Self {
        self.size = normalize(size);
        self
    }

    /// Filter by color. Blank clears the constraint.
    pub fn with_color(mut self, color: Option<impl Into<String>>) -> Self {
        self.color = normalize(color);
        self
    }

    /// Filter by category. Blank clears the constraint.
    pub fn with_category(mut self, category: Option<impl Into<String>>) -> Self {
        self.category = normalize(category);
        self
    }

    /// Restrict to products on sale.
    pub fn with_sales_only(mut self, sales_only: bool) -> Self {
        self.sales_only = sales_only;
        self
    }

    /// Whether any constraint is set.
    pub fn is_active(&self) -> bool {
        self.size.is_some() || self.color.is_some() || self.category.is_some() || self.sales_only
    }

    /// Check `product` against every active constraint.
    pub fn matches(&self, product: &Product) -> bool {
        matches_exact(&self.size, &product.size)
            && matches_exact(&self.color, &product.color)
            && matches_exact(&self.category, &product.category)
            && (!self.sales_only || product.sales_status)
    }
}

fn normalize(value: Option<impl Into<String>>) -> Option<String> {
    value.map(Into::into).filter(|v| !v.is_empty())
}

fn matches_exact(wanted: &Option<String>, actual: &str) -> bool {
    wanted.as_deref().map_or(true, |w| w == actual)
}

/// Products shown in the catalog grid under `filters`.
///
/// Luggage sets are always excluded. Input order is preserved.
pub fn filter_catalog<'a>(products: &'a [Product], filters: &FilterState) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| !p.is_luggage_set())
        .filter(|p| filters.matches(p))
        .collect()
}
