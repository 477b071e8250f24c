//! Startup state.

use serde::{Deserialize, Serialize};

use crate::agent::model::Agent;
use crate::booking::model::{Booking, BookingStatus};
use crate::error::VenueResult;
use crate::event::model::{Event, EventStatus};
use crate::offer::model::{Offer, OfferStatus, DISCOUNT_PERCENT};
use crate::profile::model::Profile;
use crate::property::model::{Property, PropertyType};

/// Every collection plus the profile, as held by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub properties: Vec<Property>,
    pub events: Vec<Event>,
    pub offers: Vec<Offer>,
    pub bookings: Vec<Booking>,
    pub profile: Profile,
    pub agents: Vec<Agent>,
}

impl AppState {
    /// Mock data loaded at application start.
    pub fn seed() -> Self {
        Self {
            properties: vec![
                Property {
                    occupancy: Some(320),
                    verified: Some(true),
                    total_bookings: Some(1284),
                    themes: Some(strings(&["DJ", "Bollywood", "Ladies Night"])),
                    amenities: Some(strings(&["Parking", "Valet", "Dance Floor"])),
                    ..Property::new("p1", "Neon Night Club", "DLF CyberHub, Gurugram", PropertyType::Club)
                },
                Property {
                    occupancy: Some(150),
                    verified: Some(true),
                    total_bookings: Some(892),
                    themes: Some(strings(&["Jazz", "Live Band", "Rooftop"])),
                    amenities: Some(strings(&["WiFi", "AC", "VIP Section"])),
                    ..Property::new("p2", "Skybar Rooftop", "Connaught Place, Delhi", PropertyType::Bar)
                },
            ],
            events: vec![Event {
                id: "e1".to_string(),
                title: "Neon DJ Night".to_string(),
                date: "15082025".to_string(),
                start_time: Some("21:00".to_string()),
                price: Some("₹1500".to_string()),
                booking_limit: Some(200),
                description: Some(
                    "Experience the ultimate DJ night with neon lights and electrifying beats".to_string(),
                ),
                image: None,
                video: None,
                published: true,
                status: EventStatus::Active,
                bookings_count: Some(89),
                property_ids: strings(&["p1"]),
            }],
            offers: vec![Offer {
                id: "o1".to_string(),
                name: "Weekend Special".to_string(),
                description: Some("Get 30% off on weekend bookings".to_string()),
                start_date: "10082025".to_string(),
                end_date: "31082025".to_string(),
                discount_type: Some(DISCOUNT_PERCENT.to_string()),
                amount: Some("30".to_string()),
                image: None,
                status: OfferStatus::Active,
                bookings_count: Some(45),
                property_ids: strings(&["p1", "p2"]),
            }],
            bookings: vec![
                Booking {
                    id: "b1".to_string(),
                    event_name: "Neon DJ Night".to_string(),
                    date: "15082025".to_string(),
                    people: 4,
                    contact: "+91 98765 43210".to_string(),
                    status: BookingStatus::Confirmed,
                    customer_name: Some("Rahul Sharma".to_string()),
                    customer_email: Some("rahul@example.com".to_string()),
                    price: Some("₹6000".to_string()),
                    special_requests: None,
                    is_verified: Some(true),
                },
                Booking {
                    id: "b2".to_string(),
                    event_name: "Rooftop Jazz Evening".to_string(),
                    date: "18082025".to_string(),
                    people: 2,
                    contact: "+91 99999 11111".to_string(),
                    status: BookingStatus::Pending,
                    customer_name: Some("Priya Patel".to_string()),
                    customer_email: Some("priya@example.com".to_string()),
                    price: Some("₹1600".to_string()),
                    special_requests: None,
                    is_verified: Some(false),
                },
            ],
            profile: Profile {
                name: "Your Name".to_string(),
                email: "you@example.com".to_string(),
                phone: "+91 90000 00000".to_string(),
                national_id: "XXXX-XXXX-XXXX".to_string(),
                business_id: "BIZ-123456".to_string(),
                address: "Address line, City, State".to_string(),
                company_verified: true,
            },
            agents: Vec::new(),
        }
    }

    /// Render the whole state as pretty JSON.
    pub fn to_json(&self) -> VenueResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_contents() {
        let state = AppState::seed();
        assert_eq!(state.properties.len(), 2);
        assert_eq!(state.events.len(), 1);
        assert_eq!(state.offers.len(), 1);
        assert_eq!(state.bookings.len(), 2);
        assert!(state.agents.is_empty());
        assert_eq!(state.properties[0].name, "Neon Night Club");
        assert_eq!(state.offers[0].property_ids, vec!["p1", "p2"]);
        assert!(state.profile.company_verified);
    }

    fn assert_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate {} id {}", kind, id);
        }
    }

    #[test]
    fn test_seed_ids_unique_per_collection() {
        let state = AppState::seed();
        assert_unique("property", state.properties.iter().map(|p| p.id.as_str()));
        assert_unique("event", state.events.iter().map(|e| e.id.as_str()));
        assert_unique("offer", state.offers.iter().map(|o| o.id.as_str()));
        assert_unique("booking", state.bookings.iter().map(|b| b.id.as_str()));
        assert_unique("agent", state.agents.iter().map(|a| a.id.as_str()));
    }

    #[test]
    fn test_state_json_shape() {
        let json = AppState::seed().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["events"][0]["propertyIds"][0], "p1");
        assert_eq!(value["profile"]["aadhaar"], "XXXX-XXXX-XXXX");
        assert_eq!(value["bookings"][1]["status"], "Pending");

        let back: AppState = serde_json::from_value(value).unwrap();
        assert_eq!(back, AppState::seed());
    }
}
