//! VenueDesk Core Library
//!
//! Domain model, in-memory store and query helpers for managing venues,
//! events, offers and bookings.

pub mod agent;
pub mod booking;
pub mod date;
pub mod error;
pub mod event;
pub mod offer;
pub mod profile;
pub mod property;
pub mod query;
pub mod seed;
pub mod store;

pub use error::{VenueError, VenueResult};
pub use seed::AppState;
pub use store::DomainStore;
