//! Aggregate counts over the booking collection.

use chrono::NaiveDate;
use serde::Serialize;

use petcare_domain::{Booking, BookingStatus};

use crate::partition::upcoming_bookings;

/// Per-status counts plus the derived upcoming count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookingStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub upcoming: usize,
}

impl BookingStats {
    pub fn compute(bookings: &[Booking], today: NaiveDate) -> Self {
        let count =
            |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count();
        Self {
            total: bookings.len(),
            pending: count(BookingStatus::Pending),
            confirmed: count(BookingStatus::Confirmed),
            completed: count(BookingStatus::Completed),
            cancelled: count(BookingStatus::Cancelled),
            upcoming: upcoming_bookings(bookings, today).len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petcare_core::{BookingId, ServiceId};

    fn booking(id: &str, date: &str, status: BookingStatus) -> Booking {
        Booking {
            id: BookingId::new(id),
            service_id: ServiceId::new("1"),
            service_name: "Checkup".into(),
            provider_name: "Happy Paws Clinic".into(),
            date: date.parse().unwrap(),
            time: "09:00".into(),
            status,
            pet_name: "Milo".into(),
            notes: None,
        }
    }

    #[test]
    fn counts_add_up() {
        let today = "2026-08-30".parse().unwrap();
        let bookings = vec![
            booking("1", "2026-09-01", BookingStatus::Pending),
            booking("2", "2026-08-01", BookingStatus::Pending),
            booking("3", "2026-09-02", BookingStatus::Confirmed),
            booking("4", "2026-07-10", BookingStatus::Completed),
            booking("5", "2026-07-01", BookingStatus::Cancelled),
        ];
        let stats = BookingStats::compute(&bookings, today);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.confirmed, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.cancelled, 1);
        // the stale pending booking ("2") is not upcoming
        assert_eq!(stats.upcoming, 2);
    }
}
