//! Booking domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VenueError;

/// A customer booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    /// Denormalized event title, not an event id.
    pub event_name: String,
    /// DDMMYYYY.
    pub date: String,
    pub people: u32,
    pub contact: String,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

impl Booking {
    /// Only pending bookings can still be confirmed or cancelled.
    pub fn is_actionable(&self) -> bool {
        self.status == BookingStatus::Pending
    }
}

/// Booking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 3] = [Self::Confirmed, Self::Pending, Self::Cancelled];

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = VenueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "confirmed" => Ok(Self::Confirmed),
            "pending" => Ok(Self::Pending),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(VenueError::invalid_status("booking", s)),
        }
    }
}

/// Per-status booking totals shown on the filter chips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingStatusCounts {
    pub all: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
}

impl BookingStatusCounts {
    /// Count for one status.
    pub fn get(&self, status: BookingStatus) -> usize {
        match status {
            BookingStatus::Confirmed => self.confirmed,
            BookingStatus::Pending => self.pending,
            BookingStatus::Cancelled => self.cancelled,
        }
    }
}
