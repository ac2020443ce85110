//! Clock abstraction.
//!
//! Booking date comparisons happen at local-midnight granularity, so the
//! interesting unit here is "today" as a [`NaiveDate`]. Injecting the clock
//! keeps the partition engine and relative-date labels deterministic in tests.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Source of the current date/time.
pub trait Clock: Send + Sync {
    /// Today's date in the user's local timezone.
    fn today(&self) -> NaiveDate;

    /// Current instant (UTC), used for persistence timestamps.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed clock for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now(&self) -> DateTime<Utc> {
        self.today
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always valid")
            .and_utc()
    }
}
