use serde::{Deserialize, Serialize};

use petcare_core::{Entity, ServiceId};

/// Category of a catalog service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Grooming,
    Veterinary,
    Training,
    Boarding,
    Walking,
    Daycare,
}

impl ServiceCategory {
    /// Every concrete category, in display order.
    pub const ALL: [ServiceCategory; 6] = [
        ServiceCategory::Grooming,
        ServiceCategory::Veterinary,
        ServiceCategory::Training,
        ServiceCategory::Boarding,
        ServiceCategory::Walking,
        ServiceCategory::Daycare,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceCategory::Grooming => "Grooming",
            ServiceCategory::Veterinary => "Veterinary",
            ServiceCategory::Training => "Training",
            ServiceCategory::Boarding => "Boarding",
            ServiceCategory::Walking => "Walking",
            ServiceCategory::Daycare => "Daycare",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceCategory::Grooming => "grooming",
            ServiceCategory::Veterinary => "veterinary",
            ServiceCategory::Training => "training",
            ServiceCategory::Boarding => "boarding",
            ServiceCategory::Walking => "walking",
            ServiceCategory::Daycare => "daycare",
        }
    }
}

/// A bookable service from the read-only catalog. Never mutated by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub provider: String,
    pub category: ServiceCategory,
    /// 0.0 ..= 5.0
    pub rating: f64,
    pub reviews: u32,
    pub price: f64,
    pub price_unit: String,
    pub location: String,
    /// Numeric string with a unit suffix, e.g. "3.2 km".
    pub distance: String,
    pub image: String,
    pub description: String,
    pub features: Vec<String>,
    pub availability: Vec<String>,
    pub response_time: String,
}

impl Service {
    /// Numeric distance parsed from the display string.
    ///
    /// A value that fails to parse is treated as unbounded-far: it fails any
    /// finite max-distance filter and sorts after every parseable distance.
    pub fn distance_km(&self) -> f64 {
        parse_leading_f64(&self.distance).unwrap_or(f64::INFINITY)
    }

    /// "$25 per visit"
    pub fn display_price(&self) -> String {
        format!("${} {}", self.price, self.price_unit)
    }
}

impl Entity for Service {
    type Id = ServiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Parse a leading decimal number, ignoring any trailing unit suffix.
fn parse_leading_f64(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .take_while(|(i, c)| {
            c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+'))
        })
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_parses_leading_number() {
        assert_eq!(parse_leading_f64("3.2 km"), Some(3.2));
        assert_eq!(parse_leading_f64("  10km"), Some(10.0));
        assert_eq!(parse_leading_f64("-1.5 km"), Some(-1.5));
    }

    #[test]
    fn malformed_distance_is_unbounded_far() {
        assert_eq!(parse_leading_f64("nearby"), None);
        assert_eq!(parse_leading_f64(""), None);

        let mut service = sample_service();
        service.distance = "unknown".into();
        assert!(service.distance_km().is_infinite());
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ServiceCategory::Veterinary).unwrap(),
            "\"veterinary\""
        );
    }

    fn sample_service() -> Service {
        Service {
            id: ServiceId::new("1"),
            name: "Full Grooming".into(),
            provider: "Pawfect Groomers".into(),
            category: ServiceCategory::Grooming,
            rating: 4.8,
            reviews: 120,
            price: 45.0,
            price_unit: "per session".into(),
            location: "Downtown".into(),
            distance: "2.5 km".into(),
            image: "🛁".into(),
            description: "Bath, cut and nails".into(),
            features: vec![],
            availability: vec![],
            response_time: "Within 1 hour".into(),
        }
    }
}
