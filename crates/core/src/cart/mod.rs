//! Client-side cart.
//!
//! - [`CartAction`] - the five cart commands
//! - [`reduce`] - pure `(state, action) -> state` transition
//! - [`CartContext`] - owns one user's state, enforces the single-vendor rule
//! - [`CartStore`] - persistence seam for the remote cart document

mod action;
mod context;
mod state;
mod store;

pub use action::CartAction;
pub use context::{CartContext, CartError, single_vendor};
pub use state::{CartState, reduce};
pub use store::{CartStore, MemoryCartStore, StoreError};
