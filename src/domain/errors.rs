//! Domain Errors
//!
//! Failures raised by the outbound ports. An address that resolves to no
//! location is not one of them.

use crate::domain::value_objects::Country;

/// Errors raised by a [`GeoService`](crate::domain::ports::GeoService).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    /// The capability exists on the port but has no backing implementation.
    /// Retrying will not change the outcome.
    #[error("{operation} is not supported")]
    UnsupportedOperation { operation: &'static str },
}

/// Errors raised by a [`LocalizationService`](crate::domain::ports::LocalizationService).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocalizationError {
    #[error("no localized message for country {0}")]
    UnmappedCountry(Country),
}
