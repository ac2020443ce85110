//! Seed catalog: the default dataset used when no other source exists.
//!
//! The catalog is read-only; the client never mutates it.

use petcare_core::ServiceId;
use petcare_domain::{Service, ServiceCategory};

struct SeedService {
    id: &'static str,
    name: &'static str,
    provider: &'static str,
    category: ServiceCategory,
    rating: f64,
    reviews: u32,
    price: f64,
    price_unit: &'static str,
    location: &'static str,
    distance: &'static str,
    image: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    availability: &'static [&'static str],
    response_time: &'static str,
}

const SEED: &[SeedService] = &[
    SeedService {
        id: "1",
        name: "Full Grooming Package",
        provider: "Pawfect Groomers",
        category: ServiceCategory::Grooming,
        rating: 4.8,
        reviews: 245,
        price: 45.0,
        price_unit: "per session",
        location: "Downtown",
        distance: "2.5 km",
        image: "🛁",
        description: "Complete grooming service including bath, haircut, nail trimming and ear cleaning.",
        features: &["Bath & blow dry", "Haircut & styling", "Nail trimming", "Ear cleaning"],
        availability: &["Mon-Fri 9AM-6PM", "Sat 10AM-4PM"],
        response_time: "Within 1 hour",
    },
    SeedService {
        id: "2",
        name: "Veterinary Checkup",
        provider: "Happy Paws Clinic",
        category: ServiceCategory::Veterinary,
        rating: 4.9,
        reviews: 512,
        price: 80.0,
        price_unit: "per visit",
        location: "Midtown",
        distance: "3.2 km",
        image: "🩺",
        description: "Comprehensive health examination with vaccinations and wellness advice.",
        features: &["Full examination", "Vaccinations", "Health certificate", "Diet consultation"],
        availability: &["Mon-Sat 8AM-8PM"],
        response_time: "Within 30 minutes",
    },
    SeedService {
        id: "3",
        name: "Obedience Training",
        provider: "Good Boy Academy",
        category: ServiceCategory::Training,
        rating: 4.7,
        reviews: 189,
        price: 60.0,
        price_unit: "per session",
        location: "Westside",
        distance: "5.1 km",
        image: "🎓",
        description: "Positive-reinforcement obedience training for dogs of all ages.",
        features: &["Basic commands", "Leash training", "Behavior correction", "Progress reports"],
        availability: &["Tue-Sun 10AM-6PM"],
        response_time: "Within 2 hours",
    },
    SeedService {
        id: "4",
        name: "Overnight Boarding",
        provider: "Cozy Pet Hotel",
        category: ServiceCategory::Boarding,
        rating: 4.6,
        reviews: 324,
        price: 55.0,
        price_unit: "per night",
        location: "Northside",
        distance: "7.8 km",
        image: "🏠",
        description: "Comfortable overnight stays with 24/7 supervision and daily playtime.",
        features: &["Private suites", "24/7 supervision", "Daily playtime", "Photo updates"],
        availability: &["Every day"],
        response_time: "Within 1 hour",
    },
    SeedService {
        id: "5",
        name: "Daily Dog Walking",
        provider: "Walkies & Co",
        category: ServiceCategory::Walking,
        rating: 4.5,
        reviews: 156,
        price: 20.0,
        price_unit: "per walk",
        location: "Downtown",
        distance: "1.4 km",
        image: "🚶",
        description: "30-minute neighborhood walks with GPS tracking and photo reports.",
        features: &["GPS tracking", "Photo reports", "Flexible scheduling", "Group or solo walks"],
        availability: &["Mon-Sun 7AM-7PM"],
        response_time: "Within 15 minutes",
    },
    SeedService {
        id: "6",
        name: "Doggy Daycare",
        provider: "Playful Pups Center",
        category: ServiceCategory::Daycare,
        rating: 4.4,
        reviews: 278,
        price: 35.0,
        price_unit: "per day",
        location: "Eastside",
        distance: "4.6 km",
        image: "🎾",
        description: "Supervised group play, rest time and socialization for your pup.",
        features: &["Supervised play", "Separate small-dog area", "Webcam access", "Nap rooms"],
        availability: &["Mon-Fri 7AM-7PM"],
        response_time: "Within 1 hour",
    },
    SeedService {
        id: "7",
        name: "Mobile Cat Grooming",
        provider: "Whiskers on Wheels",
        category: ServiceCategory::Grooming,
        rating: 4.3,
        reviews: 97,
        price: 50.0,
        price_unit: "per session",
        location: "Your home",
        distance: "0.5 km",
        image: "🐱",
        description: "Stress-free grooming for cats in the comfort of your own home.",
        features: &["At-home service", "Cat-specific products", "De-shedding", "Claw trimming"],
        availability: &["Mon-Sat 9AM-5PM"],
        response_time: "Within 3 hours",
    },
    SeedService {
        id: "8",
        name: "Emergency Vet Care",
        provider: "City Animal Hospital",
        category: ServiceCategory::Veterinary,
        rating: 4.9,
        reviews: 431,
        price: 150.0,
        price_unit: "per visit",
        location: "City Center",
        distance: "6.3 km",
        image: "🚑",
        description: "Round-the-clock emergency and critical care for all pets.",
        features: &["24/7 availability", "On-site lab", "Surgery", "Intensive care"],
        availability: &["Every day, 24h"],
        response_time: "Immediate",
    },
];

/// Build the built-in service catalog.
pub fn seed_services() -> Vec<Service> {
    SEED.iter().map(to_service).collect()
}

fn to_service(seed: &SeedService) -> Service {
    Service {
        id: ServiceId::new(seed.id),
        name: seed.name.to_string(),
        provider: seed.provider.to_string(),
        category: seed.category,
        rating: seed.rating,
        reviews: seed.reviews,
        price: seed.price,
        price_unit: seed.price_unit.to_string(),
        location: seed.location.to_string(),
        distance: seed.distance.to_string(),
        image: seed.image.to_string(),
        description: seed.description.to_string(),
        features: seed.features.iter().map(|s| s.to_string()).collect(),
        availability: seed.availability.iter().map(|s| s.to_string()).collect(),
        response_time: seed.response_time.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let services = seed_services();
        let mut ids: Vec<_> = services.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), services.len());
    }

    #[test]
    fn seed_distances_all_parse() {
        for service in seed_services() {
            assert!(service.distance_km().is_finite(), "{}", service.distance);
        }
    }
}
