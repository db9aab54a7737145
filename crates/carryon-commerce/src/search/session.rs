//! Browsing state for the catalog grid.
//!
//! A [`BrowseSession`] is a plain value: every event produces a new session,
//! and [`BrowseSession::view`] renders the current page from the product
//! list. Nothing is held globally.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::search::{
    filter_catalog, paginate_by, sort_catalog, CatalogPage, FilterState, Pagination, SortKey,
    PAGE_SIZE,
};

/// Something the shopper did on the catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum BrowseEvent {
    SetSize(Option<String>),
    SetColor(Option<String>),
    SetCategory(Option<String>),
    SetSalesOnly(bool),
    ResetFilters,
    SetSort(Option<SortKey>),
    GoToPage(usize),
    NextPage,
    PreviousPage,
}

/// Filters, sort order and current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseSession {
    pub filters: FilterState,
    pub sort: Option<SortKey>,
    pub page: usize,
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            sort: None,
            page: 1,
        }
    }
}

impl BrowseSession {
    /// Fresh session: no filters, source order, page 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the filters. Always returns to page 1.
    pub fn with_filters(self, filters: FilterState) -> Self {
        Self {
            filters,
            page: 1,
            ..self
        }
    }

    /// Clear every filter. Sort order is kept.
    pub fn reset_filters(self) -> Self {
        self.with_filters(FilterState::default())
    }

    /// Change the sort order. Membership is unchanged; returns to page 1.
    pub fn with_sort(self, sort: Option<SortKey>) -> Self {
        Self {
            sort,
            page: 1,
            ..self
        }
    }

    /// Jump to `page`, clamped to the pages `products` currently yield.
    pub fn go_to_page(self, page: usize, products: &[Product]) -> Self {
        let total = self.matching(products).len();
        let page = Pagination::new(1, PAGE_SIZE, total).clamp_page(page);
        Self { page, ..self }
    }

    /// Advance one page if there is one.
    pub fn next_page(self, products: &[Product]) -> Self {
        let page = self.page.saturating_add(1);
        self.go_to_page(page, products)
    }

    /// Go back one page, stopping at page 1.
    pub fn previous_page(self) -> Self {
        let page = self.page.saturating_sub(1).max(1);
        Self { page, ..self }
    }

    /// Apply one shopper event.
    pub fn apply(self, event: BrowseEvent, products: &[Product]) -> Self {
        match event {
            BrowseEvent::SetSize(size) => {
                let filters = self.filters.clone().with_size(size);
                self.with_filters(filters)
            }
            BrowseEvent::SetColor(color) => {
                let filters = self.filters.clone().with_color(color);
                self.with_filters(filters)
            }
            BrowseEvent::SetCategory(category) => {
                let filters = self.filters.clone().with_category(category);
                self.with_filters(filters)
            }
            BrowseEvent::SetSalesOnly(sales_only) => {
                let filters = self.filters.clone().with_sales_only(sales_only);
                self.with_filters(filters)
            }
            BrowseEvent::ResetFilters => self.reset_filters(),
            BrowseEvent::SetSort(sort) => self.with_sort(sort),
            BrowseEvent::GoToPage(page) => self.go_to_page(page, products),
            BrowseEvent::NextPage => self.next_page(products),
            BrowseEvent::PreviousPage => self.previous_page(),
        }
    }

    /// Filtered and sorted products, before pagination.
    pub fn matching<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let filtered = filter_catalog(products, &self.filters);
        sort_catalog(&filtered, self.sort)
    }

    /// The current page of the grid.
    pub fn view<'a>(&self, products: &'a [Product]) -> CatalogPage<'a> {
        let matching = self.matching(products);
        let pagination = Pagination::new(self.page, PAGE_SIZE, matching.len());
        let items = paginate_by(&matching, self.page, PAGE_SIZE).to_vec();

        tracing::debug!(
            page = self.page,
            total = matching.len(),
            shown = items.len(),
            "rendered catalog page"
        );
        CatalogPage::new(items, pagination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LUGGAGE_SETS_CATEGORY;
    use crate::money::Money;

    fn products() -> Vec<Product> {
        let mut products: Vec<Product> = (0..30)
            .map(|i| {
                let mut p = Product::new(format!("Bag {i}"), Money::from_units(100 + i), "carry-on");
                p.color = if i % 2 == 0 { "red" } else { "blue" }.to_string();
                p.sales_status = i % 3 == 0;
                p
            })
            .collect();
        products.push(Product::new("Set", Money::from_units(1), LUGGAGE_SETS_CATEGORY));
        products
    }

    #[test]
    fn test_default_view_is_first_page() {
        let products = products();
        let page = BrowseSession::new().view(&products);
        assert_eq!(page.len(), PAGE_SIZE);
        assert_eq!(page.pagination.total, 30);
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.items[0].name, "Bag 0");
    }

    #[test]
    fn test_filter_change_resets_page() {
        let products = products();
        let session = BrowseSession::new().go_to_page(3, &products);
        assert_eq!(session.page, 3);

        let session = session.apply(BrowseEvent::SetColor(Some("red".into())), &products);
        assert_eq!(session.page, 1);
        assert_eq!(session.view(&products).pagination.total, 15);
    }

    #[test]
    fn test_sort_change_keeps_membership_and_resets_page() {
        let products = products();
        let session = BrowseSession::new()
            .apply(BrowseEvent::SetSalesOnly(true), &products)
            .apply(BrowseEvent::NextPage, &products);

        let before = session.matching(&products);
        let session = session.apply(BrowseEvent::SetSort(Some(SortKey::PriceHigh)), &products);
        let after = session.matching(&products);

        assert_eq!(session.page, 1);
        assert_eq!(before.len(), after.len());
        assert_eq!(after[0].name, "Bag 27");
        assert!(session.filters.sales_only);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let products = products();
        let session = BrowseSession::new()
            .next_page(&products)
            .next_page(&products)
            .next_page(&products);
        assert_eq!(session.page, 3);

        let session = session.previous_page().previous_page().previous_page();
        assert_eq!(session.page, 1);

        let session = BrowseSession::new().go_to_page(0, &products);
        assert_eq!(session.page, 1);
    }

    #[test]
    fn test_empty_result_has_no_pages() {
        let products = products();
        let session = BrowseSession::new().apply(
            BrowseEvent::SetCategory(Some("backpacks".into())),
            &products,
        );
        let page = session.view(&products);
        assert!(page.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
        assert_eq!(session.go_to_page(4, &products).page, 1);
    }

    #[test]
    fn test_reset_filters_keeps_sort() {
        let products = products();
        let session = BrowseSession::new()
            .with_sort(Some(SortKey::Rating))
            .apply(BrowseEvent::SetSize(Some("XL".into())), &products)
            .apply(BrowseEvent::ResetFilters, &products);
        assert!(!session.filters.is_active());
        assert_eq!(session.sort, Some(SortKey::Rating));
    }
}
