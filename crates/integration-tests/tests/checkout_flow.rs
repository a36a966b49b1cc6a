//! Integration tests for checkout against the fixture catalog.

use commons_market_core::cart::{CartAction, CartContext, CartError};
use commons_market_core::checkout::{Checkout, CheckoutError, PaymentOutcome, settle};
use commons_market_core::models::{CartItem, Order, PaymentSession, Product, ShippingAddress};
use commons_market_core::pricing::PricingPolicy;
use commons_market_core::{
    Cents, OrderStatus, ProductId, Timestamp, UserId, VendorId, fixtures,
};

fn catalog() -> Vec<Product> {
    fixtures::products().expect("products fixture")
}

fn product(catalog: &[Product], id: u32) -> &Product {
    catalog
        .iter()
        .find(|p| p.id == ProductId::new(id))
        .expect("product in fixture")
}

fn session() -> PaymentSession {
    PaymentSession {
        session_id: "cs_test_abc".to_string(),
        payment_intent_id: "pi_test_abc".to_string(),
    }
}

fn cart_with(catalog: &[Product], lines: &[(u32, u32)]) -> CartContext {
    let mut ctx = CartContext::new(UserId::new(9), PricingPolicy::default());
    for &(id, quantity) in lines {
        let item = CartItem::from_product(product(catalog, id), quantity);
        ctx.dispatch(CartAction::AddToCart(item)).expect("single vendor");
    }
    ctx
}

fn place(catalog: &[Product], ctx: &CartContext) -> Result<Order, CheckoutError> {
    Checkout::new(catalog, *ctx.policy()).place(
        &ctx.snapshot(),
        session(),
        ShippingAddress::default(),
        Timestamp::Pending,
    )
}

// =============================================================================
// Placing Orders
// =============================================================================

#[test]
fn test_order_totals_match_cart_totals() {
    let catalog = catalog();
    // Sourdough ($8.50) x 2 + Croissant ($4.75) x 3 = $31.25
    let ctx = cart_with(&catalog, &[(1, 2), (2, 3)]);
    let order = place(&catalog, &ctx).expect("order placed");

    let totals = *order.totals();
    assert_eq!(totals, ctx.totals());
    assert_eq!(totals.subtotal, Cents::new(3125));
    assert_eq!(totals.shipping, PricingPolicy::DEFAULT_FLAT_SHIPPING);
    assert_eq!(
        totals.total,
        totals.subtotal + totals.tax + totals.shipping + totals.platform_fee
    );
    assert_eq!(order.payment(), &session());
}

#[test]
fn test_order_is_a_snapshot() {
    let mut catalog = catalog();
    let ctx = cart_with(&catalog, &[(5, 1)]);
    let order = place(&catalog, &ctx).expect("order placed");
    let before = serde_json::to_value(&order).expect("serializes");

    if let Some(mug) = catalog.iter_mut().find(|p| p.id == ProductId::new(5)) {
        mug.price = Cents::new(99_999);
        mug.name = "Renamed Mug".to_string();
    }

    assert_eq!(serde_json::to_value(&order).expect("serializes"), before);
    assert_eq!(order.items().first().map(|i| i.price), Some(Cents::new(2800)));
}

#[test]
fn test_out_of_stock_product_blocks_checkout() {
    let catalog = catalog();
    // Free-range eggs are switched off in the fixture
    let ctx = cart_with(&catalog, &[(3, 1), (4, 1)]);
    let err = place(&catalog, &ctx).expect_err("eggs unavailable");
    assert_eq!(
        err,
        CheckoutError::OutOfStock {
            product: ProductId::new(4),
            requested: 1,
            available: 0,
        }
    );
}

#[test]
fn test_quantity_above_stock_blocks_checkout() {
    let catalog = catalog();
    let ctx = cart_with(&catalog, &[(6, 4)]);
    assert!(matches!(
        place(&catalog, &ctx),
        Err(CheckoutError::OutOfStock { requested: 4, available: 3, .. })
    ));
}

#[test]
fn test_hydrated_duplicate_lines_share_stock() {
    let catalog = catalog();
    // Woven basket has 3 in stock; two loaded lines of 3 each need 6
    let basket = CartItem::from_product(product(&catalog, 6), 3);
    let mut ctx = CartContext::new(UserId::new(9), PricingPolicy::default());
    ctx.dispatch(CartAction::LoadCart(vec![basket.clone(), basket]))
        .expect("single vendor");
    assert_eq!(ctx.state().len(), 2);

    assert_eq!(
        place(&catalog, &ctx).expect_err("oversold"),
        CheckoutError::OutOfStock {
            product: ProductId::new(6),
            requested: 6,
            available: 3,
        }
    );
}

// =============================================================================
// Vendors
// =============================================================================

#[test]
fn test_untagged_line_cannot_smuggle_second_vendor() {
    let catalog = catalog();
    let mut ctx = cart_with(&catalog, &[(1, 1)]);

    // A line without a vendor passes the cart's own check
    let tomatoes = product(&catalog, 3);
    ctx.dispatch(CartAction::AddToCart(CartItem::new(tomatoes.id, 2, tomatoes.price)))
        .expect("untagged line accepted by the cart");

    assert_eq!(
        place(&catalog, &ctx).expect_err("mixed vendors"),
        CheckoutError::Cart(CartError::MixedVendors {
            cart: VendorId::new(1),
            incoming: VendorId::new(2),
        })
    );
}

#[test]
fn test_line_vendor_disagreeing_with_catalog_rejected() {
    let catalog = catalog();
    let mut ctx = CartContext::new(UserId::new(9), PricingPolicy::default());
    let loaf = CartItem::from_product(product(&catalog, 1), 1).with_vendor(VendorId::new(3));
    ctx.dispatch(CartAction::AddToCart(loaf)).expect("empty cart");

    assert_eq!(
        place(&catalog, &ctx).expect_err("mislabeled vendor"),
        CheckoutError::Cart(CartError::MixedVendors {
            cart: VendorId::new(1),
            incoming: VendorId::new(3),
        })
    );
}

#[test]
fn test_order_vendor_resolved_from_catalog() {
    let catalog = catalog();
    let mug = product(&catalog, 5);
    let mut ctx = CartContext::new(UserId::new(9), PricingPolicy::default());
    ctx.dispatch(CartAction::AddToCart(CartItem::new(mug.id, 1, mug.price)))
        .expect("empty cart");

    let order = place(&catalog, &ctx).expect("order placed");
    assert_eq!(order.vendor_id(), Some(VendorId::new(3)));
}

// =============================================================================
// Settlement
// =============================================================================

#[test]
fn test_confirmed_payment_then_fulfillment() {
    let catalog = catalog();
    let ctx = cart_with(&catalog, &[(5, 1)]);
    let mut order = place(&catalog, &ctx).expect("order placed");

    settle(&mut order, PaymentOutcome::Confirmed, Timestamp::Pending).expect("confirmed");
    for next in [OrderStatus::Processing, OrderStatus::Shipped, OrderStatus::Delivered] {
        order.advance(next, Timestamp::Pending).expect("forward transition");
    }
    assert!(order.advance(OrderStatus::Shipped, Timestamp::Pending).is_err());
    assert_eq!(order.status_history().len(), 5);
}

#[test]
fn test_declined_payment_cancels_order() {
    let catalog = catalog();
    let ctx = cart_with(&catalog, &[(1, 1)]);
    let mut order = place(&catalog, &ctx).expect("order placed");

    let err = settle(
        &mut order,
        PaymentOutcome::Declined {
            reason: "insufficient_funds".to_string(),
        },
        Timestamp::Pending,
    )
    .expect_err("declined");

    assert_eq!(
        err,
        CheckoutError::PaymentDeclined {
            reason: "insufficient_funds".to_string()
        }
    );
    assert_eq!(order.status(), OrderStatus::Cancelled);
    assert!(order.status().is_terminal());
}
