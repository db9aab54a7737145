//! Catalog pagination.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Products per catalog page.
pub const PAGE_SIZE: usize = 12;

/// Number of pages needed for `total` items; zero when there are none.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// The 1-based `page` of `items`, [`PAGE_SIZE`] per page.
///
/// Pages past the end are empty rather than an error. Page 0 is read as
/// page 1.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    paginate_by(items, page, PAGE_SIZE)
}

/// [`paginate`] with an explicit page size.
pub fn paginate_by<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.max(1).saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Pagination info for the catalog controls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let page = page.max(1);
        let total_pages = page_count(total, per_page);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: total > page.saturating_mul(per_page),
            has_prev: page > 1,
        }
    }

    /// Get the index of the first item on this page. Page 0 reads as page 1.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Clamp `page` into `1..=total_pages` (or 1 when there are no pages).
    pub fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages.max(1))
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    ///
    /// Empty when there is at most one page, since the controls are hidden
    /// then.
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if self.total_pages <= 1 || max_visible == 0 {
            return Vec::new();
        }
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Get start item number (1-indexed), 0 when empty.
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        self.page.max(1).saturating_mul(self.per_page).min(self.total)
    }

    /// Visible range label, e.g. `13-24`.
    pub fn visible_range(&self) -> String {
        format!("{}-{}", self.start_item(), self.end_item())
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, PAGE_SIZE, 0)
    }
}

/// One rendered page of the catalog grid.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage<'a> {
    /// Products on this page.
    pub items: Vec<&'a Product>,
    /// Pagination info.
    pub pagination: Pagination,
}

impl<'a> CatalogPage<'a> {
    /// Create a page.
    pub fn new(items: Vec<&'a Product>, pagination: Pagination) -> Self {
        Self { items, pagination }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, PAGE_SIZE), 0);
        assert_eq!(page_count(12, PAGE_SIZE), 1);
        assert_eq!(page_count(13, PAGE_SIZE), 2);
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<usize> = (0..30).collect();
        assert_eq!(paginate(&items, 1), &items[0..12]);
        assert_eq!(paginate(&items, 3), &items[24..30]);
        assert!(paginate(&items, 4).is_empty());
        assert_eq!(paginate(&items, 0), paginate(&items, 1));
    }

    #[test]
    fn test_paginate_empty_list() {
        let items: Vec<usize> = Vec::new();
        assert!(paginate(&items, 1).is_empty());
    }

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn test_pagination_first_page() {
        let p = Pagination::new(1, 10, 45);
        assert!(!p.has_prev);
        assert!(p.has_next);
        assert!(p.is_first());
        assert!(!p.is_last());
    }

    #[test]
    fn test_pagination_last_page() {
        let p = Pagination::new(5, 10, 45);
        assert!(p.has_prev);
        assert!(!p.has_next);
        assert!(p.is_last());
    }

    #[test]
    fn test_pagination_exact_multiple_has_no_next() {
        let p = Pagination::new(2, PAGE_SIZE, 24);
        assert!(!p.has_next);
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::new(1, PAGE_SIZE, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next);
        assert!(!p.has_prev);
        assert_eq!(p.visible_range(), "0-0");
        assert!(p.page_numbers(7).is_empty());
        assert_eq!(p.clamp_page(5), 1);
    }

    #[test]
    fn test_pagination_page_numbers() {
        let p = Pagination::new(5, 10, 100);
        assert_eq!(p.page_numbers(5), vec![3, 4, 5, 6, 7]);

        let p = Pagination::new(1, PAGE_SIZE, 30);
        assert_eq!(p.page_numbers(7), vec![1, 2, 3]);

        let p = Pagination::new(1, PAGE_SIZE, 10);
        assert!(p.page_numbers(7).is_empty());
    }

    #[test]
    fn test_pagination_item_range() {
        let p = Pagination::new(2, PAGE_SIZE, 20);
        assert_eq!(p.start_item(), 13);
        assert_eq!(p.end_item(), 20);
        assert_eq!(p.visible_range(), "13-20");
    }

    #[test]
    fn test_deserialized_page_zero_reads_as_first_page() {
        let p: Pagination = serde_json::from_str(
            r#"{"page":0,"per_page":12,"total":5,"total_pages":1,"has_next":false,"has_prev":false}"#,
        )
        .unwrap();
        assert_eq!(p.offset(), 0);
        assert_eq!(p.visible_range(), "1-5");
    }

    #[test]
    fn test_clamp_page() {
        let p = Pagination::new(1, PAGE_SIZE, 30);
        assert_eq!(p.clamp_page(0), 1);
        assert_eq!(p.clamp_page(9), 3);
        assert_eq!(p.clamp_page(2), 2);
    }
}
