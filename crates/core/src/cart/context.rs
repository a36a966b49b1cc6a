//! Single owner of a user's cart state.

use thiserror::Error;
use tracing::{debug, instrument, warn};

use super::{CartAction, CartState, CartStore, StoreError, reduce};
use crate::models::{Cart, CartItem};
use crate::pricing::{CartTotals, PricingPolicy};
use crate::types::{Timestamp, UserId, VendorId};

/// Errors from dispatching to or persisting a [`CartContext`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The action would put lines from two vendors in one cart.
    #[error("cart holds items from vendor {cart}, cannot add items from vendor {incoming}")]
    MixedVendors { cart: VendorId, incoming: VendorId },

    /// The store collaborator failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Owns one user's cart and is the only way to change it.
///
/// UI code holds a `CartContext` and passes it down explicitly; there is no
/// shared global cart.
#[derive(Debug, Clone)]
pub struct CartContext {
    user_id: UserId,
    state: CartState,
    policy: PricingPolicy,
}

impl CartContext {
    /// An empty cart for `user_id`, priced with `policy`.
    #[must_use]
    pub const fn new(user_id: UserId, policy: PricingPolicy) -> Self {
        Self {
            user_id,
            state: CartState::new(),
            policy,
        }
    }

    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    #[must_use]
    pub const fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Apply an action.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::MixedVendors`] if the action would break the
    /// single-vendor rule; the state is left as it was.
    pub fn dispatch(&mut self, action: CartAction) -> Result<&CartState, CartError> {
        if let Err(err) = self.check_vendor(&action) {
            warn!(user_id = %self.user_id, action = action.kind(), error = %err, "Cart action rejected");
            return Err(err);
        }

        let kind = action.kind();
        self.state = reduce(std::mem::take(&mut self.state), action);
        debug!(
            user_id = %self.user_id,
            action = kind,
            lines = self.state.len(),
            units = self.state.unit_count(),
            "Cart action applied"
        );
        Ok(&self.state)
    }

    /// Current totals under this context's pricing policy.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.policy.totals(self.state.items())
    }

    /// The cart document to persist. The store fills in `updated_at`.
    #[must_use]
    pub fn snapshot(&self) -> Cart {
        Cart {
            user_id: self.user_id,
            items: self.state.items().to_vec(),
            vendor_id: self.state.vendor_id(),
            updated_at: Timestamp::Pending,
        }
    }

    /// Replace local state with the user's remote cart, if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if the store fails, or
    /// [`CartError::MixedVendors`] if the remote document is corrupt.
    #[instrument(skip(self, store), fields(user_id = %self.user_id))]
    pub fn hydrate(&mut self, store: &impl CartStore) -> Result<(), CartError> {
        match store.load(self.user_id)? {
            Some(cart) => {
                debug!(lines = cart.items.len(), "Hydrating cart from store");
                self.dispatch(CartAction::LoadCart(cart.items))?;
            }
            None => debug!("No stored cart"),
        }
        Ok(())
    }

    /// Save the current cart to the store.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if the store fails.
    #[instrument(skip(self, store), fields(user_id = %self.user_id))]
    pub fn persist(&self, store: &mut impl CartStore) -> Result<Cart, CartError> {
        let saved = store.save(self.snapshot())?;
        debug!(lines = saved.items.len(), "Cart persisted");
        Ok(saved)
    }

    fn check_vendor(&self, action: &CartAction) -> Result<(), CartError> {
        match action {
            CartAction::AddToCart(item) => match (self.state.vendor_id(), item.vendor_id) {
                (Some(cart), Some(incoming)) if cart != incoming => {
                    Err(CartError::MixedVendors { cart, incoming })
                }
                _ => Ok(()),
            },
            CartAction::LoadCart(items) => single_vendor(items).map(|_| ()),
            _ => Ok(()),
        }
    }
}

/// The one vendor shared by `items`, or an error naming the first two that differ.
///
/// # Errors
///
/// Returns [`CartError::MixedVendors`] if two lines name different vendors.
pub fn single_vendor(items: &[CartItem]) -> Result<Option<VendorId>, CartError> {
    let mut vendors = items.iter().filter_map(|item| item.vendor_id);
    let Some(first) = vendors.next() else {
        return Ok(None);
    };
    match vendors.find(|v| *v != first) {
        Some(other) => Err(CartError::MixedVendors {
            cart: first,
            incoming: other,
        }),
        None => Ok(Some(first)),
    }
}
