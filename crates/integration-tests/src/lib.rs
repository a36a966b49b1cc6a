//! Integration tests for Commons Market.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p commons-market-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_contract` - Cart reducer and context behaviour across action sequences
//! - `community_fixtures` - Offers board and events queries against the fixtures
//! - `checkout_flow` - Cart to order, pricing and persistence
//!
//! This crate only holds shared builders; the tests live under `tests/`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use commons_market_core::cart::CartAction;
use commons_market_core::models::CartItem;
use commons_market_core::{Cents, ProductId, VendorId};

/// A cart line from vendor 1 priced at `cents`.
#[must_use]
pub fn line(product: u32, quantity: u32, cents: i64) -> CartItem {
    CartItem::new(ProductId::new(product), quantity, Cents::new(cents)).with_vendor(VendorId::new(1))
}

/// `ADD_TO_CART` for [`line`].
#[must_use]
pub fn add(product: u32, quantity: u32) -> CartAction {
    CartAction::AddToCart(line(product, quantity, 1_000))
}

/// A deterministic mixed sequence of actions touching products 1 to 4.
///
/// `seed` picks the shape, so tests can sweep several sequences without a
/// random number generator.
#[must_use]
pub fn action_sequence(seed: u32, len: u32) -> Vec<CartAction> {
    (0..len)
        .map(|i| {
            let product = (seed.wrapping_mul(31).wrapping_add(i * 7)) % 4 + 1;
            match (seed + i) % 5 {
                0 | 1 => add(product, i % 3 + 1),
                2 => CartAction::RemoveFromCart(ProductId::new(product)),
                3 => CartAction::UpdateQuantity {
                    id: ProductId::new(product),
                    quantity: i % 4,
                },
                _ => CartAction::LoadCart(vec![line(product, 2, 500)]),
            }
        })
        .collect()
}
