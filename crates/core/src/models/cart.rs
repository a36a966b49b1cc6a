//! Cart documents.

use serde::{Deserialize, Serialize};

use crate::models::Product;
use crate::types::{Cents, ProductId, Timestamp, UserId, VendorId};

/// One product line in a cart.
///
/// `price` is the unit price captured when the line was added; later catalog
/// price changes do not touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Number of units.
    pub quantity: u32,
    /// Unit price snapshot.
    pub price: Cents,
    /// Display name at add-time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Display image URL at add-time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Vendor selling the product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<VendorId>,
}

impl CartItem {
    /// A bare line with no display data.
    #[must_use]
    pub const fn new(product_id: ProductId, quantity: u32, price: Cents) -> Self {
        Self {
            product_id,
            quantity,
            price,
            name: None,
            image: None,
            vendor_id: None,
        }
    }

    /// Snapshot a catalog product into a cart line.
    #[must_use]
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            quantity,
            price: product.price,
            name: Some(product.name.clone()),
            image: product.images.first().cloned(),
            vendor_id: Some(product.vendor_id),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the vendor.
    #[must_use]
    pub const fn with_vendor(mut self, vendor_id: VendorId) -> Self {
        self.vendor_id = Some(vendor_id);
        self
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Cents {
        self.price.times(self.quantity)
    }
}

/// A user's cart as persisted in the document store.
///
/// All lines belong to `vendor_id`; an empty cart has no vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Owner of the cart.
    pub user_id: UserId,
    /// Lines in the order they were added.
    pub items: Vec<CartItem>,
    /// Vendor shared by every line.
    pub vendor_id: Option<VendorId>,
    /// Last write, assigned by the store.
    pub updated_at: Timestamp,
}

impl Cart {
    /// An empty cart for a user.
    #[must_use]
    pub const fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
            vendor_id: None,
            updated_at: Timestamp::Pending,
        }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }
}
