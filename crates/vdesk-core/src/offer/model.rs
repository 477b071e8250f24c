//! Offer domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::is_date_in_range;
use crate::error::VenueError;

/// Percentage discount tag.
pub const DISCOUNT_PERCENT: &str = "%";
/// Flat amount discount tag.
pub const DISCOUNT_FLAT: &str = "Flat";
/// Buy-X-get-Y discount tag.
pub const DISCOUNT_BUY_X_GET_Y: &str = "BuyXGetY";

/// A promotional offer valid over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// DDMMYYYY.
    pub start_date: String,
    /// DDMMYYYY.
    pub end_date: String,
    /// Free-form; conventionally one of the `DISCOUNT_*` tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub status: OfferStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookings_count: Option<u32>,
    pub property_ids: Vec<String>,
}

impl Offer {
    /// Badge text such as `30% OFF`. Needs both a discount type and an amount.
    pub fn discount_label(&self) -> Option<String> {
        match (self.discount_type.as_deref(), self.amount.as_deref()) {
            (Some(DISCOUNT_PERCENT), Some(amount)) => Some(format!("{}% OFF", amount)),
            (Some(_), Some(amount)) => Some(format!("{} OFF", amount)),
            _ => None,
        }
    }

    /// Whether `today` (DDMMYYYY) falls inside the offer window.
    pub fn is_live_on(&self, today: &str) -> bool {
        is_date_in_range(today, &self.start_date, &self.end_date)
    }
}

/// Offer status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Active,
    Deactivated,
}

impl OfferStatus {
    pub const ALL: [OfferStatus; 2] = [Self::Active, Self::Deactivated];

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deactivated => "deactivated",
        }
    }
}

impl fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OfferStatus {
    type Err = VenueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "deactivated" => Ok(Self::Deactivated),
            _ => Err(VenueError::invalid_status("offer", s)),
        }
    }
}
