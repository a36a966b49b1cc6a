//! Local cart state and its transition function.

use serde::{Deserialize, Serialize};

use super::CartAction;
use crate::models::CartItem;
use crate::types::{ProductId, VendorId};

/// Ordered cart lines.
///
/// Adds and quantity updates keep one line per product. `LOAD_CART` takes its
/// items as given, so a hydrated cart may repeat a product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// State holding exactly `items`.
    #[must_use]
    pub const fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Lines in arrival order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total units across every line.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// The line for a product.
    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// The vendor of the first line that names one.
    #[must_use]
    pub fn vendor_id(&self) -> Option<VendorId> {
        self.items.iter().find_map(|item| item.vendor_id)
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product_id == product_id)
    }
}

/// Apply one action to a cart, returning the next state.
///
/// Total over every state and action: nothing here can fail. Invariants that
/// span more than the item list, such as the single-vendor rule, are checked
/// by [`CartContext`](super::CartContext) before an action gets here.
#[must_use]
pub fn reduce(mut state: CartState, action: CartAction) -> CartState {
    match action {
        CartAction::AddToCart(item) => {
            if item.quantity == 0 {
                return state;
            }
            match state.position(item.product_id) {
                Some(idx) => {
                    if let Some(line) = state.items.get_mut(idx) {
                        line.quantity = line.quantity.saturating_add(item.quantity);
                    }
                }
                None => state.items.push(item),
            }
        }
        CartAction::RemoveFromCart(product_id) => {
            state.items.retain(|item| item.product_id != product_id);
        }
        CartAction::UpdateQuantity { id, quantity: 0 } => {
            state.items.retain(|item| item.product_id != id);
        }
        CartAction::UpdateQuantity { id, quantity } => {
            if let Some(line) = state.items.iter_mut().find(|item| item.product_id == id) {
                line.quantity = quantity;
            }
        }
        CartAction::ClearCart => state.items.clear(),
        CartAction::LoadCart(items) => state.items = items,
    }
    state
}
