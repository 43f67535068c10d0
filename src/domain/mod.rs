//! Domain Layer
//!
//! Entities, value objects and the ports the application depends on.

pub mod entities;
pub mod errors;
pub mod ports;
pub mod value_objects;

pub use entities::Location;
pub use errors::{GeoError, LocalizationError};
pub use value_objects::Country;
