//! `petcare-dashboard` — the facade the presentation layer talks to.
//!
//! Holds the transient filter state and composes the catalog engine, the
//! booking partition engine, and derived statistics. All views are
//! re-derived on demand from the collections passed in; nothing is cached.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use petcare_bookings::{BookingStats, past_bookings, relative_label, upcoming_bookings};
use petcare_catalog::{filter_services, sort_services};
use petcare_core::Clock;
use petcare_domain::{Booking, FiltersPatch, Pet, Service, ServiceFilters};

/// Headline numbers for the dashboard landing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub upcoming_bookings: usize,
    pub completed_bookings: usize,
    pub total_pets: usize,
    pub total_services: usize,
}

/// Filter state + derived views over the collections.
pub struct Dashboard {
    filters: ServiceFilters,
    clock: Arc<dyn Clock>,
}

impl Dashboard {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            filters: ServiceFilters::default(),
            clock,
        }
    }

    pub fn filters(&self) -> &ServiceFilters {
        &self.filters
    }

    /// Partial filter update; unset fields keep their current value.
    pub fn apply_filters(&mut self, patch: FiltersPatch) {
        self.filters.apply(patch);
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filters.search_query = query.into();
    }

    /// Restore the default filter set (which passes the whole catalog).
    pub fn reset_filters(&mut self) {
        self.filters = ServiceFilters::default();
    }

    /// The catalog narrowed by the active filters and ordered by the active
    /// sort key.
    pub fn filtered_services(&self, catalog: &[Service]) -> Vec<Service> {
        sort_services(
            filter_services(catalog, &self.filters),
            self.filters.sort_by,
        )
    }

    pub fn upcoming(&self, bookings: &[Booking]) -> Vec<Booking> {
        upcoming_bookings(bookings, self.clock.today())
    }

    pub fn past(&self, bookings: &[Booking]) -> Vec<Booking> {
        past_bookings(bookings)
    }

    pub fn booking_stats(&self, bookings: &[Booking]) -> BookingStats {
        BookingStats::compute(bookings, self.clock.today())
    }

    pub fn stats(
        &self,
        catalog: &[Service],
        bookings: &[Booking],
        pets: &[Pet],
    ) -> DashboardStats {
        let counts = self.booking_stats(bookings);
        DashboardStats {
            upcoming_bookings: counts.upcoming,
            completed_bookings: counts.completed,
            total_pets: pets.len(),
            total_services: catalog.len(),
        }
    }

    /// "Today" / "Tomorrow" / "In N days" / absolute date.
    pub fn relative_label(&self, date: NaiveDate) -> String {
        relative_label(date, self.clock.today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petcare_catalog::seed_services;
    use petcare_core::{BookingId, FixedClock, ServiceId};
    use petcare_domain::{BookingStatus, CategoryFilter, ServiceCategory, SortBy};

    fn dashboard() -> Dashboard {
        Dashboard::new(Arc::new(FixedClock::new("2026-08-30".parse().unwrap())))
    }

    fn booking(id: &str, date: &str, status: BookingStatus) -> Booking {
        Booking {
            id: BookingId::new(id),
            service_id: ServiceId::new("1"),
            service_name: "Full Grooming Package".into(),
            provider_name: "Pawfect Groomers".into(),
            date: date.parse().unwrap(),
            time: "10:00".into(),
            status,
            pet_name: "Rex".into(),
            notes: None,
        }
    }

    #[test]
    fn default_filters_pass_whole_catalog_sorted_by_rating() {
        let catalog = seed_services();
        let services = dashboard().filtered_services(&catalog);
        assert_eq!(services.len(), catalog.len());
        for pair in services.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn filter_patch_then_reset_round_trip() {
        let mut dash = dashboard();
        dash.apply_filters(FiltersPatch {
            category: Some(CategoryFilter::Only(ServiceCategory::Walking)),
            sort_by: Some(SortBy::Price),
            ..Default::default()
        });
        let catalog = seed_services();
        let narrowed = dash.filtered_services(&catalog);
        assert!(narrowed.len() < catalog.len());

        dash.reset_filters();
        assert_eq!(dash.filters(), &ServiceFilters::default());
        assert_eq!(dash.filtered_services(&catalog).len(), catalog.len());
    }

    #[test]
    fn search_narrows_by_substring() {
        let mut dash = dashboard();
        dash.set_search("veterinary");
        let result = dash.filtered_services(&seed_services());
        assert!(!result.is_empty());
        assert!(
            result
                .iter()
                .all(|s| s.category == ServiceCategory::Veterinary)
        );
    }

    #[test]
    fn stats_compose_partitions_and_collection_sizes() {
        let dash = dashboard();
        let catalog = seed_services();
        let bookings = vec![
            booking("1", "2026-09-01", BookingStatus::Pending),
            booking("2", "2026-08-01", BookingStatus::Completed),
            booking("3", "2026-08-15", BookingStatus::Cancelled),
        ];
        let stats = dash.stats(&catalog, &bookings, &[]);
        assert_eq!(stats.upcoming_bookings, 1);
        assert_eq!(stats.completed_bookings, 1);
        assert_eq!(stats.total_pets, 0);
        assert_eq!(stats.total_services, catalog.len());
    }

    #[test]
    fn relative_label_uses_injected_clock() {
        let dash = dashboard();
        assert_eq!(dash.relative_label("2026-08-30".parse().unwrap()), "Today");
        assert_eq!(
            dash.relative_label("2026-08-31".parse().unwrap()),
            "Tomorrow"
        );
    }
}
