//! Browse the community fixtures.
//!
//! # Usage
//!
//! ```bash
//! cm-cli offers --status open
//! cm-cli events --format virtual
//! cm-cli stats
//! ```

use commons_market_core::fixtures;
use commons_market_core::models::{events_by_format, offers_by_status};
use commons_market_core::views::{EventList, OffersBoard};
use commons_market_core::{EventFormat, OfferStatus};
use tracing::info;

use super::emit;

/// Print the offers board, optionally filtered by status.
///
/// # Errors
///
/// Returns an error if the fixture fails to decode or stdout is closed.
pub fn offers(status: Option<OfferStatus>) -> Result<(), Box<dyn std::error::Error>> {
    let offers = fixtures::offers()?;
    let board = match status {
        Some(status) => OffersBoard::new(offers_by_status(&offers, status)),
        None => OffersBoard::new(&offers),
    };
    info!(shown = board.cards.len(), total = offers.len(), "Rendering offers board");
    emit(board)?;
    Ok(())
}

/// Print the events list, optionally filtered by format.
///
/// # Errors
///
/// Returns an error if the fixture fails to decode or stdout is closed.
pub fn events(format: Option<EventFormat>) -> Result<(), Box<dyn std::error::Error>> {
    let events = fixtures::events()?;
    let list = match format {
        Some(format) => EventList::new(events_by_format(&events, format)),
        None => EventList::new(&events),
    };
    info!(shown = list.rows.len(), total = events.len(), "Rendering events");
    emit(list)?;
    Ok(())
}

/// Print the community headline numbers.
///
/// # Errors
///
/// Returns an error if the fixture fails to decode or stdout is closed.
pub fn stats() -> Result<(), Box<dyn std::error::Error>> {
    let stats = fixtures::community_stats()?;
    emit(format_args!(
        "Members:          {}\nVendors:          {}\nEvents hosted:    {}\nOffers completed: {}",
        stats.members, stats.vendors, stats.events_hosted, stats.offers_completed
    ))?;
    Ok(())
}
