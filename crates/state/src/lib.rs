//! `petcare-state` — the application state store.
//!
//! The sole owner of the mutable collections (user, pets, bookings) and of
//! persistence side effects: every mutator writes the affected collection
//! through to the key-value store. Reads are synchronous and always reflect
//! the latest in-memory state.

pub mod seed;
pub mod store;

pub use store::{BOOKINGS_KEY, PETS_KEY, StateStore, USER_KEY};
