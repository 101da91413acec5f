//! Product Wire Model
//!
//! Records returned by the external product listing endpoint. The store only
//! *requires* the stable `_id`; every display attribute is tolerated with a
//! default so catalog-side schema additions never break deserialization.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shown when a product record carries no images.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.pexels.com/photos/7679720/pexels-photo-7679720.jpeg";

/// A single product from the listing endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    /// Stable unique identifier (wire name `_id`)
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Short marketing description
    #[serde(default)]
    pub description: String,

    /// Category the product is listed under (e.g., "Golden Shawl")
    #[serde(default)]
    pub category: String,

    /// Selling price in INR
    #[serde(default)]
    pub price: Decimal,

    /// Pre-discount price, when the product is on offer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,

    /// Image URLs, first one is the card image
    #[serde(default)]
    pub images: Vec<String>,

    /// Units in stock
    #[serde(default)]
    pub stock: u32,

    /// When the product was added to the catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Image to render on the card
    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map_or(PLACEHOLDER_IMAGE, String::as_str)
    }

    /// Discount percentage against `original_price`, if it is an actual discount
    pub fn discount_percent(&self) -> Option<Decimal> {
        let original = self.original_price?;
        if original <= self.price || original == Decimal::ZERO {
            return None;
        }
        let saved = original - self.price;
        Some(((saved / original) * Decimal::from(100)).round())
    }

    /// Whether the product can currently be ordered
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Paginated envelope returned by `GET /products?limit=N`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductPage {
    /// Ordered product collection (response order = display order)
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample(id: &str) -> Product {
        Product {
            id: id.into(),
            name: "Golden Shawl Classic".into(),
            description: "Premium golden shawl".into(),
            category: "Golden Shawl".into(),
            price: dec!(1499),
            original_price: None,
            images: vec![],
            stock: 5,
            created_at: None,
        }
    }

    #[test]
    fn test_page_deserializes_wire_shape() {
        let body = r#"{
            "products": [
                {"_id": "p1", "name": "Golden Shawl", "price": "1499.00"},
                {"_id": "p2"}
            ]
        }"#;
        let page: ProductPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.products.len(), 2);
        assert_eq!(page.products[0].id, "p1");
        assert_eq!(page.products[0].price, dec!(1499));
        // Second record has nothing but an id; defaults fill the rest.
        assert_eq!(page.products[1].id, "p2");
        assert!(page.products[1].name.is_empty());
        assert!(!page.products[1].in_stock());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let body = r#"{"products": [{"name": "no id"}]}"#;
        assert!(serde_json::from_str::<ProductPage>(body).is_err());
    }

    #[test]
    fn test_discount_percent() {
        let mut p = sample("p1");
        assert_eq!(p.discount_percent(), None);

        p.original_price = Some(dec!(2000));
        p.price = dec!(1500);
        assert_eq!(p.discount_percent(), Some(dec!(25)));

        // Not a discount when the "original" price is lower.
        p.original_price = Some(dec!(1000));
        assert_eq!(p.discount_percent(), None);
    }

    #[test]
    fn test_primary_image_falls_back() {
        let mut p = sample("p1");
        assert_eq!(p.primary_image(), PLACEHOLDER_IMAGE);

        p.images = vec!["https://cdn.example/a.jpg".into()];
        assert_eq!(p.primary_image(), "https://cdn.example/a.jpg");
    }
}
