//! Offers and the offer creation form.

pub mod model;

use crate::error::{VenueError, VenueResult};
use crate::event::non_blank;
use crate::query::{HasStatus, SearchQuery, Searchable};
use crate::store::Record;
use model::{Offer, OfferStatus, DISCOUNT_PERCENT};

impl Record for Offer {
    const KIND: &'static str = "offer";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Offers match on name, or on either raw date.
impl Searchable for Offer {
    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_text(&self.name)
            || query.matches_raw(&self.start_date)
            || query.matches_raw(&self.end_date)
    }
}

impl HasStatus for Offer {
    type Status = OfferStatus;

    fn status(&self) -> OfferStatus {
        self.status
    }
}

/// Raw input of the offer creation form.
#[derive(Debug, Clone)]
pub struct OfferDraft {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub discount_type: String,
    pub amount: String,
}

impl Default for OfferDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            discount_type: DISCOUNT_PERCENT.to_string(),
            amount: String::new(),
        }
    }
}

impl OfferDraft {
    /// Check required fields and build an active offer.
    pub fn validate(&self, id: String, property_ids: Vec<String>) -> VenueResult<Offer> {
        if self.name.trim().is_empty() {
            return Err(VenueError::validation("Please enter offer name"));
        }
        if self.start_date.trim().is_empty() || self.end_date.trim().is_empty() {
            return Err(VenueError::validation("Please enter start and end dates"));
        }

        Ok(Offer {
            id,
            name: self.name.clone(),
            description: non_blank(&self.description),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            discount_type: non_blank(&self.discount_type),
            amount: non_blank(&self.amount),
            image: None,
            status: OfferStatus::Active,
            bookings_count: None,
            property_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{search_with_status, StatusFilter};

    fn draft() -> OfferDraft {
        OfferDraft {
            name: "Weekend Special".to_string(),
            start_date: "10082025".to_string(),
            end_date: "31082025".to_string(),
            amount: "30".to_string(),
            ..Default::default()
        }
    }

    fn offer(id: &str) -> Offer {
        draft().validate(id.to_string(), vec!["p1".to_string()]).unwrap()
    }

    #[test]
    fn test_validate_builds_active_offer() {
        let offer = offer("o9");
        assert_eq!(offer.status, OfferStatus::Active);
        assert_eq!(offer.discount_type.as_deref(), Some("%"));
        assert_eq!(offer.amount.as_deref(), Some("30"));
        assert_eq!(offer.description, None);
        assert_eq!(offer.property_ids, vec!["p1".to_string()]);
    }

    #[test]
    fn test_validate_requires_name_then_dates() {
        let err = OfferDraft::default().validate("o".to_string(), vec![]).unwrap_err();
        assert_eq!(err.to_string(), "Please enter offer name");

        let d = OfferDraft { end_date: " ".to_string(), ..draft() };
        let err = d.validate("o".to_string(), vec![]).unwrap_err();
        assert_eq!(err.to_string(), "Please enter start and end dates");
    }

    #[test]
    fn test_discount_label() {
        let mut offer = offer("o1");
        assert_eq!(offer.discount_label().as_deref(), Some("30% OFF"));

        offer.discount_type = Some("Flat".to_string());
        offer.amount = Some("₹500".to_string());
        assert_eq!(offer.discount_label().as_deref(), Some("₹500 OFF"));

        offer.amount = None;
        assert_eq!(offer.discount_label(), None);
    }

    #[test]
    fn test_is_live_on() {
        let offer = offer("o1");
        assert!(offer.is_live_on("15082025"));
        assert!(offer.is_live_on("31082025"));
        assert!(!offer.is_live_on("01092025"));
        assert!(!offer.is_live_on("today"));
    }

    #[test]
    fn test_search_offers_by_name_dates_and_status() {
        let mut off = offer("o2");
        off.name = "Happy Hours".to_string();
        off.start_date = "01092025".to_string();
        off.end_date = "30092025".to_string();
        off.status = OfferStatus::Deactivated;
        let offers = vec![offer("o1"), off];

        assert_eq!(search_with_status(&offers, "WEEKEND", StatusFilter::All)[0].id, "o1");
        assert_eq!(search_with_status(&offers, "3009", StatusFilter::All)[0].id, "o2");
        assert_eq!(search_with_status(&offers, "2025", StatusFilter::All).len(), 2);

        let found = search_with_status(&offers, "2025", StatusFilter::Only(OfferStatus::Active));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "o1");
    }

    #[test]
    fn test_offer_status_parse() {
        assert_eq!("deactivated".parse::<OfferStatus>().unwrap(), OfferStatus::Deactivated);
        assert!("past".parse::<OfferStatus>().is_err());
    }
}
