pub mod schedule;
pub mod session;

pub use schedule::TimezoneError;
pub use session::{CatalogError, ClassCatalog, ClassSession};
