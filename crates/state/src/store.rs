//! The single application state store with write-through persistence.

use std::sync::Arc;

use petcare_catalog::seed_services;
use petcare_core::{BookingId, IdGenerator, PetId};
use petcare_domain::{
    Booking, BookingPatch, BookingStatus, NewBooking, NewPet, Pet, PetPatch, Service, User,
    UserPatch,
};
use petcare_storage::{KeyValueStore, load_or, save};

use crate::seed::{seed_bookings, seed_pets, seed_user};

/// Storage key for the serialized user.
pub const USER_KEY: &str = "petcare_user";
/// Storage key for the serialized pet list.
pub const PETS_KEY: &str = "petcare_pets";
/// Storage key for the serialized booking list.
pub const BOOKINGS_KEY: &str = "petcare_bookings";

/// Owner of the mutable collections and the read-only catalog.
///
/// Built via [`StateStore::load`]; every mutator persists the affected
/// collection before returning. Unknown-id updates are silent no-ops and
/// deletes are idempotent, matching the behavior this store replaces.
pub struct StateStore {
    user: User,
    pets: Vec<Pet>,
    bookings: Vec<Booking>,
    catalog: Vec<Service>,
    storage: Arc<dyn KeyValueStore>,
    ids: Arc<dyn IdGenerator>,
}

impl StateStore {
    /// Load persisted state, falling back to seed data for any collection
    /// that is absent or unreadable.
    pub fn load(storage: Arc<dyn KeyValueStore>, ids: Arc<dyn IdGenerator>) -> Self {
        let user = load_or(storage.as_ref(), USER_KEY, seed_user);
        let pets = load_or(storage.as_ref(), PETS_KEY, seed_pets);
        let bookings = load_or(storage.as_ref(), BOOKINGS_KEY, seed_bookings);
        tracing::debug!(
            pets = pets.len(),
            bookings = bookings.len(),
            "state store loaded"
        );
        Self {
            user,
            pets,
            bookings,
            catalog: seed_services(),
            storage,
            ids,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// The read-only service catalog. Never mutated, never persisted.
    pub fn catalog(&self) -> &[Service] {
        &self.catalog
    }

    /// Shallow-merge the patch into the current user.
    pub fn update_user(&mut self, patch: UserPatch) {
        self.user.apply(patch);
        self.persist_user();
    }

    /// Assign an id and append. Status is caller-supplied (typically pending).
    pub fn add_booking(&mut self, booking: NewBooking) -> BookingId {
        let id = BookingId::new(self.ids.next_id());
        self.bookings.push(booking.into_booking(id.clone()));
        self.persist_bookings();
        id
    }

    /// Shallow-merge into the matching booking; silently does nothing when
    /// the id is unknown.
    pub fn update_booking(&mut self, id: &BookingId, patch: BookingPatch) {
        if let Some(booking) = self.bookings.iter_mut().find(|b| &b.id == id) {
            booking.apply(patch);
        }
        self.persist_bookings();
    }

    /// Force status to cancelled regardless of the prior status.
    ///
    /// Deliberately skips `BookingStatus::can_transition_to`: the source
    /// behavior cancels completed bookings too, and that is preserved here.
    pub fn cancel_booking(&mut self, id: &BookingId) {
        if let Some(booking) = self.bookings.iter_mut().find(|b| &b.id == id) {
            booking.status = BookingStatus::Cancelled;
        }
        self.persist_bookings();
    }

    /// Remove by id; deleting an unknown id is a no-op.
    pub fn delete_booking(&mut self, id: &BookingId) {
        self.bookings.retain(|b| &b.id != id);
        self.persist_bookings();
    }

    pub fn add_pet(&mut self, pet: NewPet) -> PetId {
        let id = PetId::new(self.ids.next_id());
        self.pets.push(pet.into_pet(id.clone()));
        self.persist_pets();
        id
    }

    pub fn update_pet(&mut self, id: &PetId, patch: PetPatch) {
        if let Some(pet) = self.pets.iter_mut().find(|p| &p.id == id) {
            pet.apply(patch);
        }
        self.persist_pets();
    }

    /// Remove by id. Existing bookings keep their denormalized pet name.
    pub fn delete_pet(&mut self, id: &PetId) {
        self.pets.retain(|p| &p.id != id);
        self.persist_pets();
    }

    /// Administrative teardown: clear all persisted keys and restore seeds.
    pub fn reset(&mut self) {
        self.storage.remove(USER_KEY);
        self.storage.remove(PETS_KEY);
        self.storage.remove(BOOKINGS_KEY);
        self.user = seed_user();
        self.pets = seed_pets();
        self.bookings = seed_bookings();
        tracing::info!("state store reset to seed data");
    }

    fn persist_user(&self) {
        save(self.storage.as_ref(), USER_KEY, &self.user);
    }

    fn persist_pets(&self) {
        save(self.storage.as_ref(), PETS_KEY, &self.pets);
    }

    fn persist_bookings(&self) {
        save(self.storage.as_ref(), BOOKINGS_KEY, &self.bookings);
    }
}
