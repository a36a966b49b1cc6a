//! Persistence seam for cart documents.
//!
//! The real store is the hosted document database; this crate only defines
//! the contract it must satisfy and an in-memory stand-in.

use std::collections::HashMap;

use chrono::Utc;
use thiserror::Error;

use crate::models::Cart;
use crate::types::{Timestamp, UserId};

/// Errors surfaced by a cart store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store could not be reached or refused the request.
    #[error("persistence unavailable: {0}")]
    Unavailable(String),
}

/// Load and save cart documents keyed by user.
///
/// Saves are last-write-wins; the store assigns `updated_at`.
pub trait CartStore {
    /// Fetch a user's cart, `None` if they have never saved one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the store cannot be reached.
    fn load(&self, user_id: UserId) -> Result<Option<Cart>, StoreError>;

    /// Overwrite a user's cart, returning the document as stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the store cannot be reached.
    fn save(&mut self, cart: Cart) -> Result<Cart, StoreError>;
}

/// In-memory [`CartStore`] for tests and the CLI.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    carts: HashMap<UserId, Cart>,
    offline: bool,
}

impl MemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the network were down.
    pub const fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    /// Number of stored carts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline {
            Err(StoreError::Unavailable("memory store is offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self, user_id: UserId) -> Result<Option<Cart>, StoreError> {
        self.check_online()?;
        Ok(self.carts.get(&user_id).cloned())
    }

    fn save(&mut self, mut cart: Cart) -> Result<Cart, StoreError> {
        self.check_online()?;
        cart.updated_at = Timestamp::at(Utc::now());
        self.carts.insert(cart.user_id, cart.clone());
        Ok(cart)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::CartItem;
    use crate::types::{Cents, ProductId};

    #[test]
    fn test_save_assigns_server_timestamp() {
        let mut store = MemoryCartStore::new();
        let saved = store.save(Cart::empty(UserId::new(1))).unwrap();
        assert!(!saved.updated_at.is_pending());
        assert_eq!(store.load(UserId::new(1)).unwrap(), Some(saved));
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = MemoryCartStore::new();
        store.save(Cart::empty(UserId::new(1))).unwrap();

        let mut second = Cart::empty(UserId::new(1));
        second
            .items
            .push(CartItem::new(ProductId::new(2), 1, Cents::new(100)));
        store.save(second).unwrap();

        let loaded = store.load(UserId::new(1)).unwrap().unwrap();
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_offline_store_fails() {
        let mut store = MemoryCartStore::new();
        store.set_offline(true);
        assert!(matches!(
            store.load(UserId::new(1)),
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.save(Cart::empty(UserId::new(1))).is_err());
    }
}
