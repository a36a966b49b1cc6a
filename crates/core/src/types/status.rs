//! Status enums for orders and community listings.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a placed order.
///
/// The fulfillment path is `Pending -> Paid -> Processing -> Shipped ->
/// Delivered`. `Cancelled` branches off before shipping and `Refunded` after
/// payment. See [`OrderStatus::can_transition_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Created at checkout, awaiting payment confirmation.
    #[default]
    Pending,
    /// Payment captured.
    Paid,
    /// Vendor is preparing the order.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Received by the buyer.
    Delivered,
    /// Cancelled before shipping.
    Cancelled,
    /// Payment returned to the buyer.
    Refunded,
}

impl OrderStatus {
    /// Whether no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Refunded)
    }

    /// Whether an order in this status may move to `next`.
    ///
    /// Transitions only ever move forward; re-entering the current status is
    /// not a transition.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Paid | Self::Cancelled)
                | (
                    Self::Paid,
                    Self::Processing | Self::Cancelled | Self::Refunded
                )
                | (
                    Self::Processing,
                    Self::Shipped | Self::Cancelled | Self::Refunded
                )
                | (Self::Shipped, Self::Delivered | Self::Refunded)
                | (Self::Delivered, Self::Refunded)
        )
    }

    /// Snake-case name as stored in documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a community offer on the offers board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OfferStatus {
    /// Accepting responses.
    Open,
    /// Someone has taken the offer up.
    InProgress,
    /// Finished.
    Completed,
}

impl OfferStatus {
    /// Human-readable label shown on the board.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OfferStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "in-progress" | "in_progress" | "in progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("invalid offer status: {s}")),
        }
    }
}

/// How an event is attended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventFormat {
    /// Online only.
    Virtual,
    /// At a physical venue.
    #[serde(rename = "In-Person")]
    InPerson,
}

impl EventFormat {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Virtual => "Virtual",
            Self::InPerson => "In-Person",
        }
    }
}

impl fmt::Display for EventFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EventFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "virtual" => Ok(Self::Virtual),
            "in-person" | "in_person" | "inperson" => Ok(Self::InPerson),
            _ => Err(format!("invalid event format: {s}")),
        }
    }
}
