//! Customer bookings.

pub mod model;

use crate::query::HasStatus;
use crate::store::Record;
use model::{Booking, BookingStatus, BookingStatusCounts};

impl Record for Booking {
    const KIND: &'static str = "booking";

    fn id(&self) -> &str {
        &self.id
    }
}

impl HasStatus for Booking {
    type Status = BookingStatus;

    fn status(&self) -> BookingStatus {
        self.status
    }
}

/// Tally bookings by status.
pub fn status_counts(bookings: &[Booking]) -> BookingStatusCounts {
    bookings
        .iter()
        .fold(BookingStatusCounts::default(), |mut counts, booking| {
            counts.all += 1;
            match booking.status {
                BookingStatus::Confirmed => counts.confirmed += 1,
                BookingStatus::Pending => counts.pending += 1,
                BookingStatus::Cancelled => counts.cancelled += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{filter_by_status, StatusFilter};

    fn booking(id: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            event_name: "Neon DJ Night".to_string(),
            date: "15082025".to_string(),
            people: 2,
            contact: "+91 90000 00000".to_string(),
            status,
            customer_name: None,
            customer_email: None,
            price: None,
            special_requests: None,
            is_verified: None,
        }
    }

    fn bookings() -> Vec<Booking> {
        vec![
            booking("b1", BookingStatus::Confirmed),
            booking("b2", BookingStatus::Pending),
            booking("b3", BookingStatus::Pending),
            booking("b4", BookingStatus::Cancelled),
        ]
    }

    #[test]
    fn test_status_counts() {
        let counts = status_counts(&bookings());
        assert_eq!(counts.all, 4);
        assert_eq!(counts.confirmed, 1);
        assert_eq!(counts.get(BookingStatus::Pending), 2);
        assert_eq!(counts.cancelled, 1);
        assert_eq!(status_counts(&[]), BookingStatusCounts::default());
    }

    #[test]
    fn test_filter_bookings_by_status() {
        let bookings = bookings();
        let pending = filter_by_status(&bookings, StatusFilter::Only(BookingStatus::Pending));
        let ids: Vec<&str> = pending.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b2", "b3"]);
        assert_eq!(filter_by_status(&bookings, StatusFilter::All).len(), 4);
    }

    #[test]
    fn test_is_actionable() {
        assert!(booking("b", BookingStatus::Pending).is_actionable());
        assert!(!booking("b", BookingStatus::Confirmed).is_actionable());
        assert!(!booking("b", BookingStatus::Cancelled).is_actionable());
    }

    #[test]
    fn test_booking_status_wire_form() {
        let json = serde_json::to_value(booking("b1", BookingStatus::Cancelled)).unwrap();
        assert_eq!(json["status"], "Cancelled");
        assert_eq!(json["eventName"], "Neon DJ Night");
        assert!("CONFIRMED".parse::<BookingStatus>().is_ok());
        assert!("Refunded".parse::<BookingStatus>().is_err());
    }
}
