//! Catalog search module.
//!
//! Filters, sort order, pagination and the browsing session that ties them
//! together.

mod filter;
mod pagination;
mod session;
mod sort;

pub use filter::{filter_catalog, FilterState};
pub use pagination::{page_count, paginate, paginate_by, CatalogPage, Pagination, PAGE_SIZE};
pub use session::{BrowseEvent, BrowseSession};
pub use sort::{sort_catalog, SortKey};
