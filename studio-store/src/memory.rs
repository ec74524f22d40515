use studio_catalog::{ClassCatalog, ClassSession};
use studio_ledger::{AdmissionError, AdmissionPolicy, Booking, BookingLedger};
use tokio::sync::RwLock;

/// Listing view: a session plus its current booked count
#[derive(Debug, Clone)]
pub struct ClassAvailability {
    pub session: ClassSession,
    pub booked: u32,
}

impl ClassAvailability {
    pub fn available_slots(&self) -> u32 {
        self.session.capacity.saturating_sub(self.booked)
    }
}

/// A booking joined with the session it reserves
#[derive(Debug, Clone)]
pub struct BookingRecord {
    pub booking: Booking,
    pub session: ClassSession,
}

/// Outcome of a successful admission
#[derive(Debug, Clone)]
pub struct AdmittedBooking {
    pub booking: Booking,
    pub session: ClassSession,
    pub available_slots: u32,
}

/// Shared application store: the immutable class catalog plus the booking
/// ledger behind a lock.
///
/// Constructed once at process start and passed into the API state; there are
/// no hidden singletons. The write lock is held across the whole
/// read-check-append of an admission so the capacity and duplicate-booking
/// invariants hold under concurrent requests.
pub struct StudioStore {
    catalog: ClassCatalog,
    ledger: RwLock<BookingLedger>,
}

impl StudioStore {
    pub fn new(catalog: ClassCatalog, policy: AdmissionPolicy) -> Self {
        Self {
            catalog,
            ledger: RwLock::new(BookingLedger::with_policy(policy)),
        }
    }

    pub fn catalog(&self) -> &ClassCatalog {
        &self.catalog
    }

    /// Admit a booking request against the ledger
    pub async fn attempt_booking(
        &self,
        class_id: i64,
        name: &str,
        email: &str,
    ) -> Result<AdmittedBooking, AdmissionError> {
        let session = self
            .catalog
            .get(class_id)
            .ok_or(AdmissionError::ClassNotFound(class_id))?;

        let mut ledger = self.ledger.write().await;
        let booking = ledger.admit(session, name, email)?;
        let available_slots = session.capacity.saturating_sub(ledger.booked_count(class_id));

        Ok(AdmittedBooking {
            booking,
            session: session.clone(),
            available_slots,
        })
    }

    /// All sessions ordered by start time, with their current booked counts
    pub async fn list_classes(&self) -> Vec<ClassAvailability> {
        let ledger = self.ledger.read().await;
        self.catalog
            .sessions_by_start()
            .into_iter()
            .map(|session| ClassAvailability {
                session: session.clone(),
                booked: ledger.booked_count(session.id),
            })
            .collect()
    }

    /// Bookings for an attendee, each joined with its session, insertion order preserved
    pub async fn bookings_by_email(&self, email: &str) -> Vec<BookingRecord> {
        let ledger = self.ledger.read().await;
        ledger
            .bookings_for_email(email)
            .into_iter()
            .filter_map(|booking| {
                self.catalog
                    .get(booking.class_id)
                    .map(|session| BookingRecord {
                        booking: booking.clone(),
                        session: session.clone(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use std::sync::Arc;

    fn catalog_with(id: i64, capacity: u32) -> ClassCatalog {
        let mut catalog = ClassCatalog::new();
        catalog
            .insert(ClassSession {
                id,
                name: "Yoga".to_string(),
                instructor: "Priya".to_string(),
                start_time: Utc::now() + Duration::hours(24),
                capacity,
            })
            .unwrap();
        catalog
    }

    #[tokio::test]
    async fn test_booking_flow() {
        let store = StudioStore::new(catalog_with(1, 2), AdmissionPolicy::default());

        let admitted = store.attempt_booking(1, "Ana", "a@x.com").await.unwrap();
        assert_eq!(admitted.booking.class_id, 1);
        assert_eq!(admitted.available_slots, 1);

        let listing = store.list_classes().await;
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].booked, 1);
        assert_eq!(listing[0].available_slots(), 1);

        let records = store.bookings_by_email("A@X.com").await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].session.name, "Yoga");
        assert_eq!(records[0].booking.id, admitted.booking.id);
    }

    #[tokio::test]
    async fn test_unknown_class_rejected() {
        let store = StudioStore::new(catalog_with(1, 2), AdmissionPolicy::default());

        let result = store.attempt_booking(99, "Ana", "a@x.com").await;
        assert!(matches!(result, Err(AdmissionError::ClassNotFound(99))));
    }

    #[tokio::test]
    async fn test_concurrent_admissions_respect_capacity() {
        let store = Arc::new(StudioStore::new(catalog_with(1, 3), AdmissionPolicy::default()));

        let mut handles = Vec::new();
        for i in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .attempt_booking(1, "Attendee", &format!("attendee{}@x.com", i))
                    .await
            }));
        }

        let mut admitted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                admitted += 1;
            }
        }

        assert_eq!(admitted, 3);
        assert_eq!(store.list_classes().await[0].available_slots(), 0);
    }
}
