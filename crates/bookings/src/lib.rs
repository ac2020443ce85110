//! `petcare-bookings` — partitioning and scheduling views over bookings.
//!
//! Everything here is a pure function of the full booking collection and a
//! reference date; there is no stored "upcoming list". Callers pass `today`
//! explicitly (usually from a `Clock`) so the views stay deterministic.

pub mod partition;
pub mod schedule;
pub mod stats;

pub use partition::{bookings_by_status, past_bookings, upcoming_bookings};
pub use schedule::{days_until, format_booking_date, relative_label};
pub use stats::BookingStats;
