use crate::booking::Booking;
use studio_catalog::ClassSession;

/// Tunable admission rules, supplied from configuration
#[derive(Debug, Clone, Default)]
pub struct AdmissionPolicy {
    /// Cap on bookings one attendee may hold across all classes. None means unlimited.
    pub max_bookings_per_email: Option<u32>,
}

/// Append-only ledger of admitted bookings.
///
/// Bookings are never mutated or deleted; insertion order is the query order.
pub struct BookingLedger {
    bookings: Vec<Booking>,
    policy: AdmissionPolicy,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::with_policy(AdmissionPolicy::default())
    }

    pub fn with_policy(policy: AdmissionPolicy) -> Self {
        Self {
            bookings: Vec::new(),
            policy,
        }
    }

    /// Number of bookings recorded against a class
    pub fn booked_count(&self, class_id: i64) -> u32 {
        self.bookings
            .iter()
            .filter(|b| b.class_id == class_id)
            .count() as u32
    }

    /// Validate-and-commit: turn a booking request into a `Booking` or a rejection.
    ///
    /// Checks run in a fixed order: attendee validation, capacity, duplicate,
    /// per-attendee cap. Capacity comes before the duplicate test so a full or
    /// zero-capacity class always reports `CapacityExceeded`.
    pub fn admit(
        &mut self,
        session: &ClassSession,
        name: &str,
        email: &str,
    ) -> Result<Booking, AdmissionError> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() {
            return Err(AdmissionError::Validation(
                "attendee name must not be empty".to_string(),
            ));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(AdmissionError::Validation(
                "attendee email is not valid".to_string(),
            ));
        }

        if self.booked_count(session.id) >= session.capacity {
            return Err(AdmissionError::CapacityExceeded {
                class_id: session.id,
                capacity: session.capacity,
            });
        }

        if self
            .bookings
            .iter()
            .any(|b| b.class_id == session.id && b.is_for_email(email))
        {
            return Err(AdmissionError::DuplicateBooking {
                class_id: session.id,
                email: email.to_string(),
            });
        }

        if let Some(max) = self.policy.max_bookings_per_email {
            let held = self
                .bookings
                .iter()
                .filter(|b| b.is_for_email(email))
                .count() as u32;
            if held >= max {
                return Err(AdmissionError::LimitReached { max });
            }
        }

        let booking = Booking::new(session.id, name.to_string(), email.to_string());
        self.bookings.push(booking.clone());
        Ok(booking)
    }

    /// All bookings for an attendee, insertion order preserved
    pub fn bookings_for_email(&self, email: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.is_for_email(email))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AdmissionError {
    #[error("Class not found: {0}")]
    ClassNotFound(i64),

    #[error("Class {class_id} is full: capacity {capacity} reached")]
    CapacityExceeded { class_id: i64, capacity: u32 },

    #[error("{email} already has a booking for class {class_id}")]
    DuplicateBooking { class_id: i64, email: String },

    #[error("Attendee already holds the maximum of {max} bookings")]
    LimitReached { max: u32 },

    #[error("Validation failed: {0}")]
    Validation(String),
}
