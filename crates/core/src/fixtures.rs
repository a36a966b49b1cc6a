//! Static datasets standing in for remote query results.
//!
//! Each dataset is a JSON document shaped exactly like the store's response,
//! embedded at compile time. They back the CLI and the end-to-end checks,
//! which treat them as the expected source of truth.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{CommunityStats, Event, Offer, Product, Vendor};

const OFFERS_JSON: &str = include_str!("../fixtures/offers.json");
const EVENTS_JSON: &str = include_str!("../fixtures/events.json");
const STATS_JSON: &str = include_str!("../fixtures/stats.json");
const VENDORS_JSON: &str = include_str!("../fixtures/vendors.json");
const PRODUCTS_JSON: &str = include_str!("../fixtures/products.json");

/// An embedded dataset failed to decode.
#[derive(Debug, Error)]
#[error("fixture {name} is malformed: {source}")]
pub struct FixtureError {
    pub name: &'static str,
    #[source]
    pub source: serde_json::Error,
}

fn decode<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<T, FixtureError> {
    serde_json::from_str(json).map_err(|source| FixtureError { name, source })
}

/// The community offers board.
///
/// # Errors
///
/// Returns [`FixtureError`] if the embedded document does not decode.
pub fn offers() -> Result<Vec<Offer>, FixtureError> {
    decode("offers", OFFERS_JSON)
}

/// Upcoming community events.
///
/// # Errors
///
/// Returns [`FixtureError`] if the embedded document does not decode.
pub fn events() -> Result<Vec<Event>, FixtureError> {
    decode("events", EVENTS_JSON)
}

/// Community page headline numbers.
///
/// # Errors
///
/// Returns [`FixtureError`] if the embedded document does not decode.
pub fn community_stats() -> Result<CommunityStats, FixtureError> {
    decode("stats", STATS_JSON)
}

/// Vendor profiles for the mock catalog.
///
/// # Errors
///
/// Returns [`FixtureError`] if the embedded document does not decode.
pub fn vendors() -> Result<Vec<Vendor>, FixtureError> {
    decode("vendors", VENDORS_JSON)
}

/// Products for the mock catalog.
///
/// # Errors
///
/// Returns [`FixtureError`] if the embedded document does not decode.
pub fn products() -> Result<Vec<Product>, FixtureError> {
    decode("products", PRODUCTS_JSON)
}
