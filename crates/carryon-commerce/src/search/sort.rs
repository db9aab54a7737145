//! Catalog sort options.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CommerceError;

/// Sort options for the catalog grid.
///
/// No sort at all (`Option::<SortKey>::None`) keeps source catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
    /// Most popular first.
    Popularity,
    /// Highest rated first.
    Rating,
}

impl SortKey {
    /// All sort keys in menu order.
    pub const ALL: [SortKey; 4] = [
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Popularity,
        SortKey::Rating,
    ];

    /// Value used on the wire and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Popularity => "popularity",
            SortKey::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Popularity => "Most Popular",
            SortKey::Rating => "Highest Rated",
        }
    }

    /// Parse a sort selection where blank or `"none"` means no sorting.
    pub fn parse_optional(value: &str) -> Result<Option<SortKey>, CommerceError> {
        match value.trim() {
            "" | "none" => Ok(None),
            other => other.parse().map(Some),
        }
    }

    /// Ordering of two products under this key.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            SortKey::Popularity => b.popularity.total_cmp(&a.popularity),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CommerceError::UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return `items` ordered by `key`; `None` keeps the input order.
///
/// The sort is stable and the input is left untouched.
pub fn sort_catalog<P>(items: &[P], key: Option<SortKey>) -> Vec<P>
where
    P: Borrow<Product> + Clone,
{
    let mut sorted = items.to_vec();
    if let Some(key) = key {
        sorted.sort_by(|a, b| key.compare(a.borrow(), b.borrow()));
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(name: &str, price: i64, popularity: f64, rating: f64) -> Product {
        let mut p = Product::new(name, Money::from_units(price), "carry-on");
        p.popularity = popularity;
        p.rating = rating;
        p
    }

    fn products() -> Vec<Product> {
        vec![
            product("A", 300, 10.0, 4.0),
            product("B", 100, 50.0, 4.5),
            product("C", 200, 50.0, 3.0),
            product("D", 100, 5.0, 4.5),
        ]
    }

    fn names(items: &[Product]) -> Vec<&str> {
        items.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_price() {
        let products = products();
        assert_eq!(
            names(&sort_catalog(&products, Some(SortKey::PriceLow))),
            vec!["B", "D", "C", "A"]
        );
        assert_eq!(
            names(&sort_catalog(&products, Some(SortKey::PriceHigh))),
            vec!["A", "C", "B", "D"]
        );
    }

    #[test]
    fn test_sort_descending_scores_is_stable() {
        let products = products();
        assert_eq!(
            names(&sort_catalog(&products, Some(SortKey::Popularity))),
            vec!["B", "C", "A", "D"]
        );
        assert_eq!(
            names(&sort_catalog(&products, Some(SortKey::Rating))),
            vec!["B", "D", "A", "C"]
        );
    }

    #[test]
    fn test_no_sort_keeps_order_and_input_untouched() {
        let products = products();
        let sorted = sort_catalog(&products, None);
        assert_eq!(sorted, products);

        let _ = sort_catalog(&products, Some(SortKey::PriceLow));
        assert_eq!(names(&products), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_sort_borrowed_products() {
        let products = products();
        let refs: Vec<&Product> = products.iter().collect();
        let sorted = sort_catalog(&refs, Some(SortKey::PriceHigh));
        assert_eq!(sorted[0].name, "A");
    }

    #[test]
    fn test_parse_sort_keys() {
        assert_eq!("price-low".parse::<SortKey>().unwrap(), SortKey::PriceLow);
        assert_eq!(SortKey::parse_optional("").unwrap(), None);
        assert_eq!(SortKey::parse_optional("none").unwrap(), None);
        assert_eq!(
            SortKey::parse_optional("rating").unwrap(),
            Some(SortKey::Rating)
        );
        assert!(matches!(
            "cheapest".parse::<SortKey>(),
            Err(CommerceError::UnknownSortKey(_))
        ));
    }
}
