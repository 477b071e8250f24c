//! The in-memory domain store.
//!
//! One `DomainStore` owns every collection for the lifetime of the process.
//! All operations are synchronous: a read right after a mutation always sees
//! the mutated state. Update and delete on an unknown id do nothing; they
//! report whether anything changed but never fail.

use tracing::debug;
use uuid::Uuid;

use crate::agent::model::Agent;
use crate::booking::model::{Booking, BookingStatus};
use crate::error::VenueResult;
use crate::event::model::Event;
use crate::event::EventDraft;
use crate::offer::model::Offer;
use crate::offer::OfferDraft;
use crate::profile::model::{Profile, ProfileUpdate};
use crate::property::model::Property;
use crate::seed::AppState;

/// A collection member addressed by a string id.
pub trait Record {
    /// Entity name used in log output.
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// Append without a duplicate-id check.
fn add<T: Record>(items: &mut Vec<T>, item: T) {
    debug!(kind = T::KIND, id = item.id(), "record added");
    items.push(item);
}

/// Replace the first record with `id` wholesale.
fn replace<T: Record>(items: &mut [T], id: &str, item: T) -> bool {
    match items.iter_mut().find(|existing| existing.id() == id) {
        Some(slot) => {
            *slot = item;
            debug!(kind = T::KIND, id, "record replaced");
            true
        }
        None => {
            debug!(kind = T::KIND, id, "update skipped, no record with this id");
            false
        }
    }
}

/// Drop every record with `id`, returning how many went.
fn remove<T: Record>(items: &mut Vec<T>, id: &str) -> usize {
    let before = items.len();
    items.retain(|item| item.id() != id);
    let removed = before - items.len();
    if removed == 0 {
        debug!(kind = T::KIND, id, "delete skipped, no record with this id");
    } else {
        debug!(kind = T::KIND, id, removed, "record deleted");
    }
    removed
}

fn find<'a, T: Record>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

/// Owner of all venue data for a session.
#[derive(Debug, Clone, Default)]
pub struct DomainStore {
    state: AppState,
}

impl DomainStore {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Store loaded with the startup mock data.
    pub fn seeded() -> Self {
        Self::new(AppState::seed())
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> AppState {
        self.state.clone()
    }

    // Reads

    pub fn properties(&self) -> &[Property] {
        &self.state.properties
    }

    pub fn events(&self) -> &[Event] {
        &self.state.events
    }

    pub fn offers(&self) -> &[Offer] {
        &self.state.offers
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.state.bookings
    }

    pub fn agents(&self) -> &[Agent] {
        &self.state.agents
    }

    pub fn profile(&self) -> &Profile {
        &self.state.profile
    }

    pub fn property(&self, id: &str) -> Option<&Property> {
        find(&self.state.properties, id)
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        find(&self.state.events, id)
    }

    pub fn offer(&self, id: &str) -> Option<&Offer> {
        find(&self.state.offers, id)
    }

    pub fn booking(&self, id: &str) -> Option<&Booking> {
        find(&self.state.bookings, id)
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        find(&self.state.agents, id)
    }

    // Properties

    pub fn add_property(&mut self, property: Property) {
        add(&mut self.state.properties, property);
    }

    pub fn update_property(&mut self, id: &str, property: Property) -> bool {
        replace(&mut self.state.properties, id, property)
    }

    pub fn delete_property(&mut self, id: &str) -> usize {
        remove(&mut self.state.properties, id)
    }

    // Events

    pub fn add_event(&mut self, event: Event) {
        add(&mut self.state.events, event);
    }

    pub fn update_event(&mut self, id: &str, event: Event) -> bool {
        replace(&mut self.state.events, id, event)
    }

    pub fn delete_event(&mut self, id: &str) -> usize {
        remove(&mut self.state.events, id)
    }

    /// Validate a form draft and add the resulting event under a new id.
    ///
    /// The event is linked to the first property in the store, if any.
    pub fn create_event(&mut self, draft: &EventDraft) -> VenueResult<Event> {
        let event = draft.validate(new_id(), self.default_property_ids())?;
        self.add_event(event.clone());
        Ok(event)
    }

    // Offers

    pub fn add_offer(&mut self, offer: Offer) {
        add(&mut self.state.offers, offer);
    }

    pub fn update_offer(&mut self, id: &str, offer: Offer) -> bool {
        replace(&mut self.state.offers, id, offer)
    }

    pub fn delete_offer(&mut self, id: &str) -> usize {
        remove(&mut self.state.offers, id)
    }

    /// Validate a form draft and add the resulting offer under a new id.
    pub fn create_offer(&mut self, draft: &OfferDraft) -> VenueResult<Offer> {
        let offer = draft.validate(new_id(), self.default_property_ids())?;
        self.add_offer(offer.clone());
        Ok(offer)
    }

    // Bookings

    /// Set the status of the first booking with `id`, leaving every other field alone.
    pub fn update_booking_status(&mut self, id: &str, status: BookingStatus) -> bool {
        match self.state.bookings.iter_mut().find(|b| b.id == id) {
            Some(booking) => {
                debug!(id, from = %booking.status, to = %status, "booking status changed");
                booking.status = status;
                true
            }
            None => {
                debug!(id, "status change skipped, no booking with this id");
                false
            }
        }
    }

    // Profile

    pub fn update_profile(&mut self, update: ProfileUpdate) {
        debug!(?update, "profile merged");
        self.state.profile.merge(update);
    }

    // Agents

    pub fn add_agent(&mut self, agent: Agent) {
        add(&mut self.state.agents, agent);
    }

    pub fn update_agent(&mut self, id: &str, agent: Agent) -> bool {
        replace(&mut self.state.agents, id, agent)
    }

    pub fn delete_agent(&mut self, id: &str) -> usize {
        remove(&mut self.state.agents, id)
    }

    fn default_property_ids(&self) -> Vec<String> {
        self.state
            .properties
            .first()
            .map(|p| vec![p.id.clone()])
            .unwrap_or_default()
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}
