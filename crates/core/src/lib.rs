//! Commons Market Core - marketplace domain library.
//!
//! This crate holds everything about the marketplace that is not UI or
//! vendor SDK glue:
//! - typed documents for carts, orders, products and vendors
//! - the client-side cart state machine and its owning context
//! - cart pricing and checkout
//! - community board data (offers, events) and the fixture datasets
//!
//! # Architecture
//!
//! No network, database or payment I/O happens here. The document store and
//! payment processor are collaborators: the store sits behind
//! [`cart::CartStore`], and checkout only consumes the processor's session
//! identifiers and verdict.
//!
//! # Modules
//!
//! - [`types`] - IDs, integer-cent money, timestamps, statuses, contact details
//! - [`models`] - documents: `Cart`, `Order`, `Product`, `Vendor`, `Offer`, `Event`
//! - [`cart`] - cart actions, reducer, context and store seam
//! - [`pricing`] - subtotal, tax, shipping, platform fee and total
//! - [`checkout`] - cart to order
//! - [`fixtures`] - static datasets standing in for store queries
//! - [`views`] - display data for the offers board, events list and cart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod fixtures;
pub mod models;
pub mod pricing;
pub mod types;
pub mod views;

pub use types::*;
