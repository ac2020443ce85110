use serde::{Deserialize, Serialize};

use crate::service::ServiceCategory;

/// Category narrowing: the pseudo-category "all" passes every service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ServiceCategory),
}

impl CategoryFilter {
    pub fn matches(self, category: ServiceCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Services",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// Filter options in display order: "all" first, then every category.
    pub fn options() -> Vec<CategoryFilter> {
        let mut out = vec![CategoryFilter::All];
        out.extend(ServiceCategory::ALL.map(CategoryFilter::Only));
        out
    }
}

/// Inclusive price band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn contains(self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Catalog ordering key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Descending by rating.
    #[default]
    Rating,
    /// Ascending by price.
    Price,
    /// Ascending by parsed distance.
    Distance,
}

/// Transient UI filter state; not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceFilters {
    pub category: CategoryFilter,
    pub price_range: PriceRange,
    pub min_rating: f64,
    pub max_distance: f64,
    pub search_query: String,
    pub sort_by: SortBy,
}

impl Default for ServiceFilters {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            price_range: PriceRange {
                min: 0.0,
                max: 500.0,
            },
            min_rating: 0.0,
            max_distance: 100.0,
            search_query: String::new(),
            sort_by: SortBy::Rating,
        }
    }
}

impl ServiceFilters {
    pub fn apply(&mut self, patch: FiltersPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price_range) = patch.price_range {
            self.price_range = price_range;
        }
        if let Some(min_rating) = patch.min_rating {
            self.min_rating = min_rating;
        }
        if let Some(max_distance) = patch.max_distance {
            self.max_distance = max_distance;
        }
        if let Some(search_query) = patch.search_query {
            self.search_query = search_query;
        }
        if let Some(sort_by) = patch.sort_by {
            self.sort_by = sort_by;
        }
    }
}

/// Partial update for [`ServiceFilters`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersPatch {
    pub category: Option<CategoryFilter>,
    pub price_range: Option<PriceRange>,
    pub min_rating: Option<f64>,
    pub max_distance: Option<f64>,
    pub search_query: Option<String>,
    pub sort_by: Option<SortBy>,
}
