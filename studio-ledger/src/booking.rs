use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single attendee's reservation against one class session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub class_id: i64,
    pub attendee_name: String,
    pub attendee_email: String,
    pub booked_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(class_id: i64, attendee_name: String, attendee_email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            class_id,
            attendee_name,
            attendee_email,
            booked_at: Utc::now(),
        }
    }

    /// Whether this booking belongs to the given attendee.
    /// Email identity is case-insensitive; the stored casing is preserved.
    pub fn is_for_email(&self, email: &str) -> bool {
        self.attendee_email.to_lowercase() == email.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_match_ignores_case() {
        let booking = Booking::new(1, "Ana".to_string(), "Ana@Example.com".to_string());

        assert!(booking.is_for_email("ana@example.com"));
        assert!(booking.is_for_email("ANA@EXAMPLE.COM"));
        assert!(!booking.is_for_email("ben@example.com"));
        // Stored casing untouched
        assert_eq!(booking.attendee_email, "Ana@Example.com");
    }
}
