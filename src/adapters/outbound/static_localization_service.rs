//! Static Localization Service
//!
//! Implements LocalizationService with a compiled-in message table.

use crate::domain::errors::LocalizationError;
use crate::domain::ports::LocalizationService;
use crate::domain::value_objects::Country;

/// Russian greeting.
pub const RUSSIAN_GREETING: &str = "Добро пожаловать";

/// English greeting, also the default fallback.
pub const ENGLISH_GREETING: &str = "Welcome";

/// Localization backed by a fixed per-country table.
///
/// Countries without an entry get the fallback message, or an
/// [`LocalizationError::UnmappedCountry`] when no fallback is set.
#[derive(Debug, Clone)]
pub struct StaticLocalizationService {
    fallback: Option<String>,
}

impl StaticLocalizationService {
    /// Table with the English greeting as fallback.
    pub fn new() -> Self {
        Self {
            fallback: Some(ENGLISH_GREETING.to_string()),
        }
    }

    /// Table without fallback: unmapped countries are an error.
    pub fn strict() -> Self {
        Self { fallback: None }
    }

    /// Replace the fallback message.
    pub fn with_fallback(mut self, message: impl Into<String>) -> Self {
        self.fallback = Some(message.into());
        self
    }

    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// The message table. Exhaustive over [`Country`].
    fn message_for(country: Country) -> Option<&'static str> {
        match country {
            Country::Russia => Some(RUSSIAN_GREETING),
            Country::Usa => Some(ENGLISH_GREETING),
            Country::Germany | Country::Brazil => None,
        }
    }
}

impl Default for StaticLocalizationService {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalizationService for StaticLocalizationService {
    fn resolve(&self, country: Country) -> Result<String, LocalizationError> {
        if let Some(message) = Self::message_for(country) {
            return Ok(message.to_string());
        }

        match &self.fallback {
            Some(fallback) => {
                tracing::debug!("no message for {}, using fallback", country);
                Ok(fallback.clone())
            }
            None => Err(LocalizationError::UnmappedCountry(country)),
        }
    }
}
