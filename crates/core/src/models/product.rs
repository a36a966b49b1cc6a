//! Catalog products.

use serde::{Deserialize, Serialize};

use crate::types::{Cents, ProductId, Timestamp, VendorId};

/// A vendor's catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub vendor_id: VendorId,
    pub name: String,
    pub description: String,
    /// Current unit price.
    pub price: Cents,
    pub stock_quantity: u32,
    /// Vendor-controlled availability switch, independent of stock count.
    pub in_stock: bool,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Image URLs, first one is the primary image.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Timestamp,
}

impl Product {
    /// Units that can actually be sold right now.
    #[must_use]
    pub const fn available(&self) -> u32 {
        if self.in_stock { self.stock_quantity } else { 0 }
    }

    /// Whether `quantity` units can be sold.
    #[must_use]
    pub const fn can_fulfill(&self, quantity: u32) -> bool {
        quantity <= self.available()
    }

    /// Whether the product carries `tag`, ignoring case.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock_quantity: u32, in_stock: bool) -> Product {
        Product {
            id: ProductId::new(1),
            vendor_id: VendorId::new(1),
            name: "Sourdough Loaf".to_string(),
            description: String::new(),
            price: Cents::new(800),
            stock_quantity,
            in_stock,
            category: "Bakery".to_string(),
            tags: vec!["Organic".to_string()],
            images: Vec::new(),
            created_at: Timestamp::Pending,
            updated_at: Timestamp::Pending,
        }
    }

    #[test]
    fn test_in_stock_flag_overrides_quantity() {
        assert_eq!(product(10, false).available(), 0);
        assert!(!product(10, false).can_fulfill(1));
        assert!(product(10, true).can_fulfill(10));
        assert!(!product(10, true).can_fulfill(11));
    }

    #[test]
    fn test_has_tag_is_case_insensitive() {
        assert!(product(1, true).has_tag("organic"));
        assert!(!product(1, true).has_tag("vegan"));
    }
}
