//! `petcare-domain` — shared record shapes and enumerations.
//!
//! This crate contains the marketplace data model: the signed-in user, pets,
//! the read-only service catalog, bookings, and the transient filter state.
//! Pure data + deterministic predicates; no IO, no HTTP, no storage.

pub mod booking;
pub mod filters;
pub mod pet;
pub mod service;
pub mod user;

pub use booking::{Booking, BookingPatch, BookingStatus, NewBooking};
pub use filters::{CategoryFilter, FiltersPatch, PriceRange, ServiceFilters, SortBy};
pub use pet::{NewPet, Pet, PetPatch, PetType};
pub use service::{Service, ServiceCategory};
pub use user::{User, UserPatch, UserRole};
