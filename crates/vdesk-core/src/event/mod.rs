//! Events and the event creation form.

pub mod model;

use crate::error::{VenueError, VenueResult};
use crate::query::{HasStatus, SearchQuery, Searchable};
use crate::store::Record;
use model::{Event, EventStatus};

impl Record for Event {
    const KIND: &'static str = "event";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Events match on title, or on the raw date digits.
impl Searchable for Event {
    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_text(&self.title) || query.matches_raw(&self.date)
    }
}

impl HasStatus for Event {
    type Status = EventStatus;

    fn status(&self) -> EventStatus {
        self.status
    }
}

/// Raw input of the event creation form.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub price: String,
    pub booking_limit: String,
    pub description: String,
    pub published: bool,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            start_time: String::new(),
            price: String::new(),
            booking_limit: String::new(),
            description: String::new(),
            published: true,
        }
    }
}

impl EventDraft {
    /// Check required fields and build an active event.
    ///
    /// The draft is checked in form order, so the first missing field wins.
    pub fn validate(&self, id: String, property_ids: Vec<String>) -> VenueResult<Event> {
        if self.title.trim().is_empty() {
            return Err(VenueError::validation("Please enter event title"));
        }
        if self.date.trim().is_empty() {
            return Err(VenueError::validation("Please enter event date"));
        }

        let booking_limit = match self.booking_limit.trim() {
            "" => None,
            limit => Some(limit.parse::<u32>().map_err(|_| {
                VenueError::validation(format!("Booking limit must be a whole number, got '{}'", limit))
            })?),
        };

        Ok(Event {
            id,
            title: self.title.clone(),
            date: self.date.clone(),
            start_time: non_blank(&self.start_time),
            price: non_blank(&self.price),
            booking_limit,
            description: non_blank(&self.description),
            image: None,
            video: None,
            published: self.published,
            status: EventStatus::Active,
            bookings_count: None,
            property_ids,
        })
    }
}

/// Empty form fields are stored as absent, not as empty strings.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
