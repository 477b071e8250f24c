//! Venues: clubs, bars, restaurants and the like.

pub mod model;

use crate::query::{SearchQuery, Searchable};
use crate::store::Record;
use model::Property;

impl Record for Property {
    const KIND: &'static str = "property";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Properties match on name or location.
impl Searchable for Property {
    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_text(&self.name) || query.matches_text(&self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::model::{Property, PropertyType};
    use crate::query::search;

    fn properties() -> Vec<Property> {
        vec![
            Property::new("p1", "Neon Night Club", "DLF CyberHub, Gurugram", PropertyType::Club),
            Property::new("p2", "Skybar Rooftop", "Connaught Place, Delhi", PropertyType::Bar),
        ]
    }

    #[test]
    fn test_search_by_name_or_location() {
        let props = properties();
        assert_eq!(search(&props, "club")[0].id, "p1");
        assert_eq!(search(&props, "delhi")[0].id, "p2");
        assert_eq!(search(&props, "").len(), 2);
        assert!(search(&props, "farm").is_empty());
    }

    #[test]
    fn test_property_type_parse() {
        assert_eq!("Restaurant & Bar".parse::<PropertyType>().unwrap(), PropertyType::RestaurantAndBar);
        assert_eq!("club".parse::<PropertyType>().unwrap(), PropertyType::Club);
        assert!("Casino".parse::<PropertyType>().is_err());
    }

    #[test]
    fn test_property_serializes_camel_case() {
        let mut prop = Property::new("p9", "Barn", "Outskirts", PropertyType::RestaurantAndBar);
        prop.entry_fee_24h = Some("₹999".to_string());
        prop.total_bookings = Some(3);

        let json = serde_json::to_value(&prop).unwrap();
        assert_eq!(json["type"], "Restaurant & Bar");
        assert_eq!(json["entryFee24h"], "₹999");
        assert_eq!(json["totalBookings"], 3);
        assert!(json.get("occupancy").is_none());

        let back: Property = serde_json::from_value(json).unwrap();
        assert_eq!(back, prop);
    }

    #[test]
    fn test_absent_verified_is_unverified() {
        let prop = Property::new("p3", "Hall", "Noida", PropertyType::Banquet);
        assert!(!prop.is_verified());
    }
}
