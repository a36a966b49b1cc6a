//! Documents persisted in the remote store, and community listings.

pub mod cart;
pub mod community;
pub mod order;
pub mod product;
pub mod vendor;

pub use cart::{Cart, CartItem};
pub use community::{
    CommunityStats, Event, Offer, events_by_format, offers_by_status, upcoming_events,
};
pub use order::{Order, OrderError, PaymentSession, ShippingAddress, StatusChange};
pub use product::Product;
pub use vendor::{Vendor, VendorContact};
