//! Catalog narrowing and ordering.
//!
//! Filtering is conjunctive: a service must pass every predicate. Sorting
//! operates on its own copy and is stable, so services tied on the sort key
//! keep their catalog order.

use petcare_core::ServiceId;
use petcare_domain::{Service, ServiceFilters, SortBy};

/// Narrow the catalog to services passing all five filter predicates.
pub fn filter_services(services: &[Service], filters: &ServiceFilters) -> Vec<Service> {
    services
        .iter()
        .filter(|service| matches_filters(service, filters))
        .cloned()
        .collect()
}

fn matches_filters(service: &Service, filters: &ServiceFilters) -> bool {
    if !filters.category.matches(service.category) {
        return false;
    }
    if !filters.price_range.contains(service.price) {
        return false;
    }
    if service.rating < filters.min_rating {
        return false;
    }
    // Unparseable distances read as infinity and fail any finite ceiling.
    if service.distance_km() > filters.max_distance {
        return false;
    }
    if !filters.search_query.is_empty() {
        let query = filters.search_query.to_lowercase();
        let haystack = format!(
            "{} {} {} {}",
            service.name,
            service.provider,
            service.description,
            service.category.as_str()
        )
        .to_lowercase();
        if !haystack.contains(&query) {
            return false;
        }
    }
    true
}

/// Order a filtered subset by the chosen key.
pub fn sort_services(services: Vec<Service>, sort_by: SortBy) -> Vec<Service> {
    let mut sorted = services;
    match sort_by {
        SortBy::Rating => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Price => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::Distance => sorted.sort_by(|a, b| a.distance_km().total_cmp(&b.distance_km())),
    }
    sorted
}

/// Look up a catalog service by id.
pub fn service_by_id<'a>(services: &'a [Service], id: &ServiceId) -> Option<&'a Service> {
    services.iter().find(|s| &s.id == id)
}
