//! Product types.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::money::Money;

/// Category value marking a luggage-set bundle.
///
/// Sets never appear in the regular catalog grid; they have their own
/// "best sets" shelf.
pub const LUGGAGE_SETS_CATEGORY: &str = "luggage sets";

/// Number of stars in a rating display.
pub const MAX_STARS: u8 = 5;

/// Product identifier as it appears in the dataset.
///
/// Datasets use both `"id": "17"` and `"id": 17`; both decode to the same
/// string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self(n.to_string()),
        })
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier.
    #[serde(default)]
    pub id: ProductId,
    /// Display name, unique within its category.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Category, e.g. `"carry-on"` or [`LUGGAGE_SETS_CATEGORY`].
    pub category: String,
    /// Size label.
    #[serde(default)]
    pub size: String,
    /// Color label.
    #[serde(default)]
    pub color: String,
    /// Whether the product is currently discounted.
    #[serde(default)]
    pub sales_status: bool,
    /// Average rating, 0 to 5.
    #[serde(default)]
    pub rating: f64,
    /// Popularity score; higher is more popular.
    #[serde(default)]
    pub popularity: f64,
    /// Product image.
    #[serde(default)]
    pub image_url: String,
    /// Home-page shelves featuring this product.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<String>,
}

impl Product {
    /// Create a product with the required fields; everything else defaults.
    pub fn new(name: impl Into<String>, price: Money, category: impl Into<String>) -> Self {
        Self {
            id: ProductId::default(),
            name: name.into(),
            price,
            category: category.into(),
            size: String::new(),
            color: String::new(),
            sales_status: false,
            rating: 0.0,
            popularity: 0.0,
            image_url: String::new(),
            blocks: Vec::new(),
        }
    }

    /// Check if this product is a luggage set bundle.
    pub fn is_luggage_set(&self) -> bool {
        self.category == LUGGAGE_SETS_CATEGORY
    }

    /// Check if this product is featured on the given home-page shelf.
    pub fn in_block(&self, block: &str) -> bool {
        self.blocks.iter().any(|b| b == block)
    }

    /// The purchasable variant this product represents.
    pub fn variant_key(&self) -> VariantKey {
        VariantKey {
            name: self.name.clone(),
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }

    /// Check whether two products are the same purchasable variant.
    ///
    /// Price and every other field are ignored.
    pub fn is_same_variant(&self, other: &Product) -> bool {
        self.name == other.name && self.size == other.size && self.color == other.color
    }

    /// Number of filled stars: the rating rounded half away from zero,
    /// clamped to `0..=MAX_STARS`.
    pub fn filled_stars(&self) -> u8 {
        if !self.rating.is_finite() {
            return 0;
        }
        self.rating.round().clamp(0.0, MAX_STARS as f64) as u8
    }

    /// Star rating as one flag per star, filled first.
    pub fn star_rating(&self) -> [bool; MAX_STARS as usize] {
        let filled = self.filled_stars();
        std::array::from_fn(|i| (i as u8) < filled)
    }

    /// Star rating rendered as text, e.g. `★★★★☆`.
    pub fn star_rating_display(&self) -> String {
        self.star_rating()
            .iter()
            .map(|filled| if *filled { '\u{2605}' } else { '\u{2606}' })
            .collect()
    }
}

/// Identity of a purchasable variant: (name, size, color).
///
/// Two cart entries with the same key are the same line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantKey {
    pub name: String,
    pub size: String,
    pub color: String,
}

impl VariantKey {
    /// Create a key from its parts.
    pub fn new(name: impl Into<String>, size: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            color: color.into(),
        }
    }

    /// Check whether `product` is this variant.
    pub fn matches(&self, product: &Product) -> bool {
        product.name == self.name && product.size == self.size && product.color == self.color
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.size, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(rating: f64) -> Product {
        let mut p = Product::new("Trolley Bag", Money::from_units(250), "carry-on");
        p.rating = rating;
        p
    }

    #[test]
    fn test_product_from_dataset_json() {
        let json = r#"{
            "id": 7,
            "name": "Trolley Bag",
            "price": 250,
            "category": "carry-on",
            "size": "S",
            "color": "red",
            "salesStatus": true,
            "rating": 4.5,
            "popularity": 88,
            "imageUrl": "/img/trolley.png",
            "blocks": ["Selected Products"]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "7");
        assert_eq!(product.price, Money::from_units(250));
        assert!(product.sales_status);
        assert!(product.in_block("Selected Products"));
        assert!(!product.is_luggage_set());
    }

    #[test]
    fn test_product_optional_fields_default() {
        let json = r#"{"id": "a1", "name": "Set", "price": 999.5, "category": "luggage sets"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.is_luggage_set());
        assert!(product.blocks.is_empty());
        assert_eq!(product.price, Money::new(99950));
    }

    #[test]
    fn test_same_variant_ignores_price() {
        let a = Product::new("Trolley Bag", Money::from_units(250), "carry-on");
        let mut b = a.clone();
        b.price = Money::from_units(1);
        assert!(a.is_same_variant(&b));

        b.color = "blue".to_string();
        assert!(!a.is_same_variant(&b));
        assert!(!a.variant_key().matches(&b));
    }

    #[test]
    fn test_star_rating_rounds() {
        assert_eq!(bag(4.5).filled_stars(), 5);
        assert_eq!(bag(4.4).filled_stars(), 4);
        assert_eq!(bag(0.0).filled_stars(), 0);
        assert_eq!(bag(7.0).filled_stars(), 5);
        assert_eq!(bag(3.0).star_rating(), [true, true, true, false, false]);
        assert_eq!(bag(2.0).star_rating_display(), "\u{2605}\u{2605}\u{2606}\u{2606}\u{2606}");
    }
}
