use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use petcare_core::{BookingId, Entity, ServiceId};

/// Booking status lifecycle.
///
/// Transitions move only forward or to cancelled:
/// pending → confirmed → completed, pending/confirmed → cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// Badge color classes used by the presentation layer.
    pub fn color_class(self) -> &'static str {
        match self {
            BookingStatus::Pending => "bg-yellow-100 text-yellow-800",
            BookingStatus::Confirmed => "bg-blue-100 text-blue-800",
            BookingStatus::Completed => "bg-green-100 text-green-800",
            BookingStatus::Cancelled => "bg-red-100 text-red-800",
        }
    }

    /// Still in play: eligible for the upcoming partition (date permitting).
    pub fn is_open(self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    /// Terminal: belongs to the past partition.
    pub fn is_settled(self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// Whether the forward-only lifecycle permits moving to `next`.
    ///
    /// Note the state store's `cancel_booking` deliberately bypasses this
    /// check (source parity); this predicate exists for callers that want
    /// to validate before mutating.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        match (self, next) {
            (BookingStatus::Pending, BookingStatus::Confirmed) => true,
            (BookingStatus::Confirmed, BookingStatus::Completed) => true,
            (BookingStatus::Pending | BookingStatus::Confirmed, BookingStatus::Cancelled) => true,
            _ => false,
        }
    }
}

/// A booked appointment.
///
/// Service and pet names are denormalized at booking time; deleting a pet
/// does not cascade, an orphaned display name is accepted behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub service_id: ServiceId,
    pub service_name: String,
    pub provider_name: String,
    /// ISO date, compared at local-midnight granularity.
    pub date: NaiveDate,
    /// "HH:MM"
    pub time: String,
    pub status: BookingStatus,
    pub pet_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Booking {
    pub fn apply(&mut self, patch: BookingPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(pet_name) = patch.pet_name {
            self.pet_name = pet_name;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
    }
}

impl Entity for Booking {
    type Id = BookingId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A booking as submitted through the booking form; the store assigns the id.
/// Status is caller-supplied (typically pending).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub service_id: ServiceId,
    pub service_name: String,
    pub provider_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: BookingStatus,
    pub pet_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewBooking {
    pub fn into_booking(self, id: BookingId) -> Booking {
        Booking {
            id,
            service_id: self.service_id,
            service_name: self.service_name,
            provider_name: self.provider_name,
            date: self.date,
            time: self.time,
            status: self.status,
            pet_name: self.pet_name,
            notes: self.notes,
        }
    }
}

/// Partial update for [`Booking`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub status: Option<BookingStatus>,
    pub pet_name: Option<String>,
    pub notes: Option<String>,
}
