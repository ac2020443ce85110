//! Strongly-typed identifiers used across the domain, plus id generation.
//!
//! The original client derived ids from the wall clock, which collides under
//! same-millisecond inserts. Here id generation sits behind [`IdGenerator`]
//! so production code uses time-ordered UUIDs while tests inject a
//! deterministic sequence.

use core::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

/// Identifier of a pet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(String);

/// Identifier of a catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

/// Identifier of a booking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

macro_rules! impl_string_id {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(DomainError::invalid_id(concat!($name, ": empty")));
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

impl_string_id!(UserId, "UserId");
impl_string_id!(PetId, "PetId");
impl_string_id!(ServiceId, "ServiceId");
impl_string_id!(BookingId, "BookingId");

/// Source of fresh identifiers for pets and bookings.
pub trait IdGenerator: Send + Sync {
    /// Produce the next identifier as a plain string; callers wrap it in the
    /// appropriate typed id.
    fn next_id(&self) -> String;
}

/// Production generator: UUIDv7 (time-ordered).
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

/// Deterministic generator for tests: "1", "2", "3", ...
#[derive(Debug, Default)]
pub struct SequenceIdGenerator {
    counter: AtomicU64,
}

impl SequenceIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from a specific value (next id will be `start + 1`).
    pub fn starting_at(start: u64) -> Self {
        Self {
            counter: AtomicU64::new(start),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> String {
        let next = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        next.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_generator_is_deterministic() {
        let ids = SequenceIdGenerator::new();
        assert_eq!(ids.next_id(), "1");
        assert_eq!(ids.next_id(), "2");
        assert_eq!(ids.next_id(), "3");
    }

    #[test]
    fn uuid_generator_produces_distinct_ids() {
        let ids = UuidIdGenerator;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn typed_id_rejects_empty_string() {
        assert!(BookingId::from_str("  ").is_err());
        assert!(PetId::from_str("7").is_ok());
    }
}
