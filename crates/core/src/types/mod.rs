//! Value types for Commons Market.
//!
//! Type-safe wrappers for IDs, money, timestamps, statuses and contact details.

pub mod contact;
pub mod id;
pub mod money;
pub mod status;
pub mod timestamp;

pub use contact::{Email, EmailError, Rating, RatingError};
pub use id::*;
pub use money::Cents;
pub use status::*;
pub use timestamp::Timestamp;
