//! Seed data for the mutable collections, used when nothing is persisted.

use petcare_core::{BookingId, PetId, ServiceId, UserId};
use petcare_domain::{Booking, BookingStatus, Pet, PetType, User, UserRole};

pub fn seed_user() -> User {
    User {
        id: UserId::new("1"),
        name: "John Doe".into(),
        email: "john.doe@example.com".into(),
        phone: Some("+1 (555) 123-4567".into()),
        avatar: Some("👤".into()),
        role: UserRole::Owner,
    }
}

pub fn seed_pets() -> Vec<Pet> {
    vec![
        Pet {
            id: PetId::new("1"),
            name: "Rex".into(),
            kind: PetType::Dog,
            breed: "Golden Retriever".into(),
            age: 3,
            image_url: None,
        },
        Pet {
            id: PetId::new("2"),
            name: "Milo".into(),
            kind: PetType::Cat,
            breed: "British Shorthair".into(),
            age: 2,
            image_url: None,
        },
    ]
}

pub fn seed_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: BookingId::new("1"),
            service_id: ServiceId::new("1"),
            service_name: "Full Grooming Package".into(),
            provider_name: "Pawfect Groomers".into(),
            date: "2026-09-05".parse().expect("valid seed date"),
            time: "10:00".into(),
            status: BookingStatus::Confirmed,
            pet_name: "Rex".into(),
            notes: Some("Please use sensitive-skin shampoo".into()),
        },
        Booking {
            id: BookingId::new("2"),
            service_id: ServiceId::new("2"),
            service_name: "Veterinary Checkup".into(),
            provider_name: "Happy Paws Clinic".into(),
            date: "2026-09-12".parse().expect("valid seed date"),
            time: "14:30".into(),
            status: BookingStatus::Pending,
            pet_name: "Milo".into(),
            notes: None,
        },
        Booking {
            id: BookingId::new("3"),
            service_id: ServiceId::new("5"),
            service_name: "Daily Dog Walking".into(),
            provider_name: "Walkies & Co".into(),
            date: "2026-08-10".parse().expect("valid seed date"),
            time: "08:00".into(),
            status: BookingStatus::Completed,
            pet_name: "Rex".into(),
            notes: None,
        },
    ]
}
