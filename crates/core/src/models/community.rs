//! Community board entities: offers, events and headline stats.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{EventFormat, EventId, OfferId, OfferStatus};

/// A post on the community offers board, either asking for or offering a
/// service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: OfferId,
    pub title: String,
    pub description: String,
    /// Display name of the member who posted it.
    pub author: String,
    pub category: String,
    pub status: OfferStatus,
    /// Number of replies from other members.
    pub responses: u32,
    pub posted: NaiveDate,
}

/// A community event listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Local start time as displayed, e.g. `6:00 PM`.
    pub time: String,
    /// Venue, or the meeting platform for virtual events.
    pub location: String,
    #[serde(rename = "type")]
    pub format: EventFormat,
    pub attendees: u32,
}

/// Headline numbers shown on the community page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityStats {
    pub members: u32,
    pub vendors: u32,
    pub events_hosted: u32,
    pub offers_completed: u32,
}

/// Events of one format, in listing order.
pub fn events_by_format(events: &[Event], format: EventFormat) -> impl Iterator<Item = &Event> {
    events.iter().filter(move |event| event.format == format)
}

/// Offers with one status, in listing order.
pub fn offers_by_status(offers: &[Offer], status: OfferStatus) -> impl Iterator<Item = &Offer> {
    offers.iter().filter(move |offer| offer.status == status)
}

/// Events on or after `from`, soonest first.
#[must_use]
pub fn upcoming_events(events: &[Event], from: NaiveDate) -> Vec<&Event> {
    let mut upcoming: Vec<&Event> = events.iter().filter(|e| e.date >= from).collect();
    upcoming.sort_by_key(|e| e.date);
    upcoming
}
