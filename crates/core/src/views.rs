//! Display data for offers, events and carts.
//!
//! These are the strings a page shows, built from documents. Rendering them
//! into markup belongs to the UI; here they implement [`Display`] as plain
//! text so the CLI and the end-to-end checks can read them.

use core::fmt::{self, Display};

use crate::models::{CartItem, Event, Offer};
use crate::pricing::CartTotals;

/// Pluralize a response count: `1 response`, `3 responses`.
fn responses_label(count: u32) -> String {
    if count == 1 {
        "1 response".to_string()
    } else {
        format!("{count} responses")
    }
}

/// One card on the offers board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferCard {
    pub title: String,
    pub author: String,
    pub category: String,
    pub status: String,
    pub responses: String,
}

impl From<&Offer> for OfferCard {
    fn from(offer: &Offer) -> Self {
        Self {
            title: offer.title.clone(),
            author: offer.author.clone(),
            category: offer.category.clone(),
            status: offer.status.label().to_string(),
            responses: responses_label(offer.responses),
        }
    }
}

impl Display for OfferCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        write!(
            f,
            "  by {} | {} | {} | {}",
            self.author, self.category, self.status, self.responses
        )
    }
}

/// The community offers board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OffersBoard {
    pub cards: Vec<OfferCard>,
}

impl OffersBoard {
    #[must_use]
    pub fn new<'a>(offers: impl IntoIterator<Item = &'a Offer>) -> Self {
        Self {
            cards: offers.into_iter().map(OfferCard::from).collect(),
        }
    }
}

impl Display for OffersBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("No offers yet.");
        }
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// One row in the events list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub title: String,
    pub when: String,
    pub location: String,
    pub format: String,
    pub attendees: u32,
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            when: format!("{} at {}", event.date.format("%b %-d, %Y"), event.time),
            location: event.location.clone(),
            format: event.format.label().to_string(),
            attendees: event.attendees,
        }
    }
}

impl Display for EventRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.title, self.format)?;
        write!(
            f,
            "  {} | {} | {} attending",
            self.when, self.location, self.attendees
        )
    }
}

/// The events page list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventList {
    pub rows: Vec<EventRow>,
}

impl EventList {
    #[must_use]
    pub fn new<'a>(events: impl IntoIterator<Item = &'a Event>) -> Self {
        Self {
            rows: events.into_iter().map(EventRow::from).collect(),
        }
    }
}

impl Display for EventList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return f.write_str("No events scheduled.");
        }
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Cart contents with priced totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub lines: Vec<String>,
    pub totals: CartTotals,
}

impl CartSummary {
    #[must_use]
    pub fn new(items: &[CartItem], totals: CartTotals) -> Self {
        let lines = items
            .iter()
            .map(|item| {
                let name = item
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("Product #{}", item.product_id));
                format!(
                    "{} x {} @ {} = {}",
                    item.quantity,
                    name,
                    item.price,
                    item.line_total()
                )
            })
            .collect();
        Self { lines, totals }
    }
}

impl Display for CartSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            writeln!(f, "Your cart is empty.")?;
        }
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "Subtotal:     {}", self.totals.subtotal)?;
        writeln!(f, "Tax:          {}", self.totals.tax)?;
        writeln!(f, "Shipping:     {}", self.totals.shipping)?;
        writeln!(f, "Platform fee: {}", self.totals.platform_fee)?;
        write!(f, "Total:        {}", self.totals.total)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::pricing::calculate_totals;
    use crate::types::{Cents, EventFormat, EventId, OfferId, OfferStatus, ProductId};

    fn offer(responses: u32) -> Offer {
        Offer {
            id: OfferId::new(1),
            title: "Need Logo Design".to_string(),
            description: String::new(),
            author: "David Kim".to_string(),
            category: "Design".to_string(),
            status: OfferStatus::InProgress,
            responses,
            posted: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
        }
    }

    #[test]
    fn test_offer_card_labels() {
        let card = OfferCard::from(&offer(1));
        assert_eq!(card.status, "In Progress");
        assert_eq!(card.responses, "1 response");
        assert_eq!(OfferCard::from(&offer(0)).responses, "0 responses");
    }

    #[test]
    fn test_offer_card_text() {
        let text = OfferCard::from(&offer(8)).to_string();
        assert_eq!(
            text,
            "Need Logo Design\n  by David Kim | Design | In Progress | 8 responses"
        );
    }

    #[test]
    fn test_empty_board() {
        assert_eq!(OffersBoard::default().to_string(), "No offers yet.");
    }

    #[test]
    fn test_event_row() {
        let event = Event {
            id: EventId::new(2),
            title: "Community Farmers Market".to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 4, 13).unwrap(),
            time: "9:00 AM".to_string(),
            location: "Central Park Pavilion".to_string(),
            format: EventFormat::InPerson,
            attendees: 120,
        };
        let row = EventRow::from(&event);
        assert_eq!(row.when, "Apr 13, 2024 at 9:00 AM");
        assert_eq!(row.format, "In-Person");
    }

    #[test]
    fn test_cart_summary_lines() {
        let items = [
            CartItem::new(ProductId::new(1), 2, Cents::new(850)).with_name("Sourdough"),
            CartItem::new(ProductId::new(7), 1, Cents::new(100)),
        ];
        let summary = CartSummary::new(&items, calculate_totals(&items));
        assert_eq!(
            summary.lines,
            vec![
                "2 x Sourdough @ $8.50 = $17.00".to_string(),
                "1 x Product #7 @ $1.00 = $1.00".to_string(),
            ]
        );
        assert!(summary.to_string().contains("Total:"));
    }
}
