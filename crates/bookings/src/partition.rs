//! Splitting the booking collection into upcoming and past views.
//!
//! A booking is exactly one of: upcoming (open status, dated today or later),
//! past (settled status), or neither (an open booking whose date has slipped
//! by without being completed or cancelled).

use chrono::NaiveDate;

use petcare_domain::{Booking, BookingStatus};

/// Open bookings dated today or later, ascending by date.
pub fn upcoming_bookings(bookings: &[Booking], today: NaiveDate) -> Vec<Booking> {
    let mut upcoming: Vec<Booking> = bookings
        .iter()
        .filter(|b| b.status.is_open() && b.date >= today)
        .cloned()
        .collect();
    upcoming.sort_by_key(|b| b.date);
    upcoming
}

/// Settled bookings (completed or cancelled), descending by date.
pub fn past_bookings(bookings: &[Booking]) -> Vec<Booking> {
    let mut past: Vec<Booking> = bookings
        .iter()
        .filter(|b| b.status.is_settled())
        .cloned()
        .collect();
    past.sort_by_key(|b| std::cmp::Reverse(b.date));
    past
}

/// All bookings with a given status, in collection order.
pub fn bookings_by_status(bookings: &[Booking], status: BookingStatus) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| b.status == status)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use petcare_core::{BookingId, ServiceId};

    fn booking(id: &str, date: &str, status: BookingStatus) -> Booking {
        Booking {
            id: BookingId::new(id),
            service_id: ServiceId::new("1"),
            service_name: "Full Grooming".into(),
            provider_name: "Pawfect Groomers".into(),
            date: date.parse().unwrap(),
            time: "10:00".into(),
            status,
            pet_name: "Rex".into(),
            notes: None,
        }
    }

    fn today() -> NaiveDate {
        "2026-08-30".parse().unwrap()
    }

    #[test]
    fn pending_booking_dated_today_is_upcoming() {
        let bookings = vec![booking("1", "2026-08-30", BookingStatus::Pending)];
        let upcoming = upcoming_bookings(&bookings, today());
        assert_eq!(upcoming.len(), 1);
    }

    #[test]
    fn cancelled_booking_moves_to_past_and_out_of_upcoming() {
        let bookings = vec![booking("1", "2026-08-30", BookingStatus::Cancelled)];
        assert!(upcoming_bookings(&bookings, today()).is_empty());
        assert_eq!(past_bookings(&bookings).len(), 1);
    }

    #[test]
    fn upcoming_is_ascending_past_is_descending() {
        let bookings = vec![
            booking("1", "2026-09-10", BookingStatus::Confirmed),
            booking("2", "2026-09-01", BookingStatus::Pending),
            booking("3", "2026-08-01", BookingStatus::Completed),
            booking("4", "2026-08-15", BookingStatus::Cancelled),
        ];

        let upcoming = upcoming_bookings(&bookings, today());
        assert_eq!(
            upcoming.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(),
            vec!["2", "1"]
        );

        let past = past_bookings(&bookings);
        assert_eq!(
            past.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(),
            vec!["4", "3"]
        );
    }

    #[test]
    fn partitions_are_disjoint_and_cover_all_but_stale_open_bookings() {
        let bookings = vec![
            booking("1", "2026-09-01", BookingStatus::Pending),
            booking("2", "2026-08-01", BookingStatus::Pending), // stale: open but in the past
            booking("3", "2026-08-01", BookingStatus::Completed),
            booking("4", "2026-09-01", BookingStatus::Cancelled),
        ];

        let upcoming = upcoming_bookings(&bookings, today());
        let past = past_bookings(&bookings);

        for b in &bookings {
            let in_upcoming = upcoming.iter().any(|u| u.id == b.id);
            let in_past = past.iter().any(|p| p.id == b.id);
            assert!(!(in_upcoming && in_past));
        }

        let neither: Vec<_> = bookings
            .iter()
            .filter(|b| {
                !upcoming.iter().any(|u| u.id == b.id) && !past.iter().any(|p| p.id == b.id)
            })
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(neither, vec!["2"]);
    }

    #[test]
    fn by_status_keeps_collection_order() {
        let bookings = vec![
            booking("1", "2026-09-10", BookingStatus::Pending),
            booking("2", "2026-09-01", BookingStatus::Confirmed),
            booking("3", "2026-09-05", BookingStatus::Pending),
        ];
        let pending = bookings_by_status(&bookings, BookingStatus::Pending);
        assert_eq!(
            pending.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "3"]
        );
    }
}
