pub mod app_config;
pub mod memory;
pub mod seed;

pub use app_config::{BusinessRules, Config, ServerConfig};
pub use memory::{AdmittedBooking, BookingRecord, ClassAvailability, StudioStore};
pub use seed::seed_catalog;
