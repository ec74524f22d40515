pub mod admission;
pub mod booking;

pub use admission::{AdmissionError, AdmissionPolicy, BookingLedger};
pub use booking::Booking;
