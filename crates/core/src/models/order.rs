//! Placed orders.
//!
//! An order is written once at checkout and afterwards only its status
//! moves, forward, through [`Order::advance`]. Items and amounts are copies
//! taken at checkout, so later catalog edits never reach a placed order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::CartItem;
use crate::pricing::CartTotals;
use crate::types::{OrderId, OrderStatus, Timestamp, UserId, VendorId};

/// Errors from changing an order's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The requested status does not follow the current one.
    #[error("order cannot move from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
}

/// Identifiers handed back by the payment processor's checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSession {
    pub session_id: String,
    pub payment_intent_id: String,
}

/// Where the order ships.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub name: String,
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// One entry in an order's status history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: OrderStatus,
    pub at: Timestamp,
}

/// An immutable record of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: OrderId,
    user_id: UserId,
    vendor_id: Option<VendorId>,
    items: Vec<CartItem>,
    #[serde(flatten)]
    totals: CartTotals,
    status: OrderStatus,
    payment: PaymentSession,
    shipping_address: ShippingAddress,
    status_history: Vec<StatusChange>,
    created_at: Timestamp,
}

impl Order {
    /// Start a new order in [`OrderStatus::Pending`].
    pub(crate) fn new(
        user_id: UserId,
        vendor_id: Option<VendorId>,
        items: Vec<CartItem>,
        totals: CartTotals,
        payment: PaymentSession,
        shipping_address: ShippingAddress,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: OrderId::generate(),
            user_id,
            vendor_id,
            items,
            totals,
            status: OrderStatus::Pending,
            payment,
            shipping_address,
            status_history: vec![StatusChange {
                status: OrderStatus::Pending,
                at: created_at,
            }],
            created_at,
        }
    }

    /// Move the order to `next`, recording when it happened.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidTransition`] if `next` does not follow the
    /// current status. The order is left untouched.
    pub fn advance(&mut self, next: OrderStatus, at: Timestamp) -> Result<(), OrderError> {
        if !self.status.can_transition_to(next) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.status_history.push(StatusChange { status: next, at });
        Ok(())
    }

    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub const fn vendor_id(&self) -> Option<VendorId> {
        self.vendor_id
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub const fn totals(&self) -> &CartTotals {
        &self.totals
    }

    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    #[must_use]
    pub const fn payment(&self) -> &PaymentSession {
        &self.payment
    }

    #[must_use]
    pub const fn shipping_address(&self) -> &ShippingAddress {
        &self.shipping_address
    }

    /// Every status the order has held, oldest first.
    #[must_use]
    pub fn status_history(&self) -> &[StatusChange] {
        &self.status_history
    }

    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
