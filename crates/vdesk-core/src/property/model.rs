//! Property domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VenueError;

/// A venue owned by the business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub themes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_fee: Option<String>,
    #[serde(default, rename = "entryFee24h", skip_serializing_if = "Option::is_none")]
    pub entry_fee_24h: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_fee_per_hour: Option<String>,
    #[serde(default, rename = "weekendPrice24h", skip_serializing_if = "Option::is_none")]
    pub weekend_price_24h: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekend_price_per_hour: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_price_delta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range_days: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_bookings: Option<u32>,
}

impl Property {
    /// A property with only the required fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: impl Into<String>, kind: PropertyType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            kind,
            occupancy: None,
            agent_name: None,
            agent_ids: None,
            themes: None,
            amenities: None,
            image: None,
            media: None,
            entry_fee: None,
            entry_fee_24h: None,
            entry_fee_per_hour: None,
            weekend_price_24h: None,
            weekend_price_per_hour: None,
            event_price_delta: None,
            price_range_hours: None,
            price_range_days: None,
            discount_percent: None,
            verified: None,
            total_bookings: None,
        }
    }

    /// Whether the venue has been verified. Absent means not verified.
    pub fn is_verified(&self) -> bool {
        self.verified.unwrap_or(false)
    }
}

/// Venue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Club,
    Bar,
    Restaurant,
    #[serde(rename = "Restaurant & Bar")]
    RestaurantAndBar,
    Farmhouse,
    Banquet,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        Self::Club,
        Self::Bar,
        Self::Restaurant,
        Self::RestaurantAndBar,
        Self::Farmhouse,
        Self::Banquet,
    ];

    /// Convert to the display form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Club => "Club",
            Self::Bar => "Bar",
            Self::Restaurant => "Restaurant",
            Self::RestaurantAndBar => "Restaurant & Bar",
            Self::Farmhouse => "Farmhouse",
            Self::Banquet => "Banquet",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = VenueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VenueError::InvalidPropertyType(s.to_string()))
    }
}
