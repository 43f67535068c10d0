//! Localization Service Port
//!
//! Defines the interface for turning a country into a greeting.

use crate::domain::errors::LocalizationError;
use crate::domain::value_objects::Country;

/// Source of localized greetings per country.
///
/// This is an outbound port. The message sender calls it once per
/// request with the country of the resolved location.
pub trait LocalizationService: Send + Sync {
    /// Get the greeting for a country.
    fn resolve(&self, country: Country) -> Result<String, LocalizationError>;
}
