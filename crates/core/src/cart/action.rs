//! Cart commands.

use serde::{Deserialize, Serialize};

use crate::models::CartItem;
use crate::types::ProductId;

/// A command that edits local cart state.
///
/// Serialized with an upper-snake `type` tag and the arguments under
/// `payload`, e.g. `{"type": "REMOVE_FROM_CART", "payload": 4}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Add a line, merging quantities with an existing line for the product.
    AddToCart(CartItem),
    /// Drop the line for a product, if any.
    RemoveFromCart(ProductId),
    /// Set the quantity of a line. Zero removes it.
    UpdateQuantity { id: ProductId, quantity: u32 },
    /// Empty the cart.
    ClearCart,
    /// Replace every line, used when hydrating from the remote cart.
    LoadCart(Vec<CartItem>),
}

impl CartAction {
    /// The wire name of the command, for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddToCart(_) => "ADD_TO_CART",
            Self::RemoveFromCart(_) => "REMOVE_FROM_CART",
            Self::UpdateQuantity { .. } => "UPDATE_QUANTITY",
            Self::ClearCart => "CLEAR_CART",
            Self::LoadCart(_) => "LOAD_CART",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Cents;

    #[test]
    fn test_wire_format() {
        let action = CartAction::UpdateQuantity {
            id: ProductId::new(4),
            quantity: 2,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "UPDATE_QUANTITY", "payload": { "id": 4, "quantity": 2 } })
        );

        let clear = serde_json::to_value(CartAction::ClearCart).unwrap();
        assert_eq!(clear, serde_json::json!({ "type": "CLEAR_CART" }));
    }

    #[test]
    fn test_parse_add_to_cart() {
        let action: CartAction = serde_json::from_str(
            r#"{"type":"ADD_TO_CART","payload":{"productId":1,"quantity":2,"price":1200}}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            CartAction::AddToCart(CartItem::new(ProductId::new(1), 2, Cents::new(1200)))
        );
        assert_eq!(action.kind(), "ADD_TO_CART");
    }

    #[test]
    fn test_negative_quantity_does_not_parse() {
        let result = serde_json::from_str::<CartAction>(
            r#"{"type":"UPDATE_QUANTITY","payload":{"id":1,"quantity":-1}}"#,
        );
        assert!(result.is_err());
    }
}
