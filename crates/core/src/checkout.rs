//! Turning a cart into an order.
//!
//! Checkout validates the cart against the catalog, snapshots lines and
//! totals into a [`Order`], and then settles it with the payment processor's
//! verdict. Talking to the processor is the caller's job; only the session
//! identifiers and the outcome come in here.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{info, warn};

use crate::cart::CartError;
use crate::models::{Cart, Order, OrderError, PaymentSession, Product, ShippingAddress};
use crate::pricing::PricingPolicy;
use crate::types::{OrderStatus, ProductId, Timestamp, VendorId};

/// Why a checkout did not produce a paid order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),

    #[error("product {product} is out of stock: requested {requested}, available {available}")]
    OutOfStock {
        product: ProductId,
        requested: u32,
        available: u32,
    },

    #[error("payment declined: {reason}")]
    PaymentDeclined { reason: String },

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// The payment processor's verdict on a checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Confirmed,
    Declined { reason: String },
}

/// Places orders against a product catalog.
#[derive(Debug, Clone, Copy)]
pub struct Checkout<'a> {
    catalog: &'a [Product],
    policy: PricingPolicy,
}

impl<'a> Checkout<'a> {
    #[must_use]
    pub const fn new(catalog: &'a [Product], policy: PricingPolicy) -> Self {
        Self { catalog, policy }
    }

    /// Create a pending order from `cart`.
    ///
    /// Vendors and stock are checked against the catalog, not against what
    /// the cart lines claim. Quantities for the same product are summed
    /// before the stock check.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`] for a cart without lines
    /// - [`CheckoutError::UnknownProduct`] if a line is not in the catalog
    /// - [`CheckoutError::Cart`] if the catalog puts lines under different
    ///   vendors, or a line names a vendor its product does not belong to
    /// - [`CheckoutError::OutOfStock`] if the catalog cannot cover a product
    pub fn place(
        &self,
        cart: &Cart,
        payment: PaymentSession,
        shipping_address: ShippingAddress,
        placed_at: Timestamp,
    ) -> Result<Order, CheckoutError> {
        if cart.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let mut vendor_id: Option<VendorId> = None;
        let mut requested: BTreeMap<ProductId, (&Product, u32)> = BTreeMap::new();

        for item in &cart.items {
            let product = self
                .product(item.product_id)
                .ok_or(CheckoutError::UnknownProduct(item.product_id))?;

            match item.vendor_id {
                Some(stated) if stated != product.vendor_id => {
                    return Err(CartError::MixedVendors {
                        cart: product.vendor_id,
                        incoming: stated,
                    }
                    .into());
                }
                _ => {}
            }
            match vendor_id {
                Some(cart_vendor) if cart_vendor != product.vendor_id => {
                    return Err(CartError::MixedVendors {
                        cart: cart_vendor,
                        incoming: product.vendor_id,
                    }
                    .into());
                }
                Some(_) => {}
                None => vendor_id = Some(product.vendor_id),
            }

            let entry = requested.entry(product.id).or_insert((product, 0));
            entry.1 = entry.1.saturating_add(item.quantity);
        }

        for (product, quantity) in requested.into_values() {
            if !product.can_fulfill(quantity) {
                warn!(
                    product_id = %product.id,
                    requested = quantity,
                    available = product.available(),
                    "Checkout blocked by stock"
                );
                return Err(CheckoutError::OutOfStock {
                    product: product.id,
                    requested: quantity,
                    available: product.available(),
                });
            }
        }

        let totals = self.policy.totals(&cart.items);
        let order = Order::new(
            cart.user_id,
            vendor_id,
            cart.items.clone(),
            totals,
            payment,
            shipping_address,
            placed_at,
        );
        info!(
            order_id = %order.id(),
            user_id = %cart.user_id,
            total = %totals.total,
            "Order placed"
        );
        Ok(order)
    }

    fn product(&self, id: ProductId) -> Option<&'a Product> {
        self.catalog.iter().find(|p| p.id == id)
    }
}

/// Apply the payment processor's verdict to a pending order.
///
/// A confirmed payment moves the order to `Paid`. A declined one cancels it
/// and is reported as [`CheckoutError::PaymentDeclined`].
///
/// # Errors
///
/// Returns [`CheckoutError::PaymentDeclined`] on decline, or
/// [`CheckoutError::Order`] if the order is no longer pending.
pub fn settle(order: &mut Order, outcome: PaymentOutcome, at: Timestamp) -> Result<(), CheckoutError> {
    match outcome {
        PaymentOutcome::Confirmed => {
            order.advance(OrderStatus::Paid, at)?;
            info!(order_id = %order.id(), "Payment confirmed");
            Ok(())
        }
        PaymentOutcome::Declined { reason } => {
            order.advance(OrderStatus::Cancelled, at)?;
            warn!(order_id = %order.id(), reason = %reason, "Payment declined");
            Err(CheckoutError::PaymentDeclined { reason })
        }
    }
}
