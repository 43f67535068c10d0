//! Message Sender - Main application use case
//!
//! Orchestrates the greeting pipeline: extract the client address from
//! request metadata, resolve it to a location, and localize a message for
//! the location's country. This is the primary interface for inbound adapters.

use crate::domain::entities::Location;
use crate::domain::errors::LocalizationError;
use crate::domain::ports::{GeoService, LocalizationService, RequestMetadata};
use crate::domain::value_objects::Country;
use std::sync::Arc;

/// Metadata key holding the client address.
pub const IP_ADDRESS_HEADER: &str = "x-real-ip";

/// Errors surfaced to the request layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// The request did not carry a required metadata entry.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    #[error(transparent)]
    Localization(#[from] LocalizationError),
}

/// Message sender - main application use case.
///
/// This service orchestrates the greeting logic:
/// 1. Reads the client address from request metadata
/// 2. Resolves the address to a location
/// 3. Localizes a greeting for the location's country
///
/// When the address resolves to an unknown region the default country
/// is localized instead, so every well-formed request gets a greeting.
pub struct MessageSender {
    geo_service: Arc<dyn GeoService>,
    localization_service: Arc<dyn LocalizationService>,
    default_country: Country,
}

impl MessageSender {
    /// Create a new message sender with USA as the default country.
    pub fn new(
        geo_service: Arc<dyn GeoService>,
        localization_service: Arc<dyn LocalizationService>,
    ) -> Self {
        Self {
            geo_service,
            localization_service,
            default_country: Country::Usa,
        }
    }

    /// Set the country used when the address resolves to an unknown region.
    pub fn with_default_country(mut self, country: Country) -> Self {
        self.default_country = country;
        self
    }

    pub fn default_country(&self) -> Country {
        self.default_country
    }

    /// Produce the greeting for a request.
    ///
    /// # Arguments
    /// * `metadata` - Request headers; must contain a non-blank
    ///   [`IP_ADDRESS_HEADER`], which is resolved as-is
    ///
    /// # Returns
    /// The localized greeting, or an error if the address header is
    /// missing or the localization table has no entry for the country.
    pub fn send(&self, metadata: &dyn RequestMetadata) -> Result<String, SendError> {
        let address = client_address(metadata)?;
        let location = self.geo_service.resolve(address);

        let country = match location.country {
            Some(country) => country,
            None => {
                tracing::debug!(
                    "address {} has no known region, using default {}",
                    address,
                    self.default_country
                );
                self.default_country
            }
        };

        let message = self.localization_service.resolve(country)?;
        tracing::info!("sent message to {} ({}): {}", address, country, message);

        Ok(message)
    }

    /// Resolve the location of the requesting client without localizing.
    pub fn locate(&self, metadata: &dyn RequestMetadata) -> Result<Location, SendError> {
        let address = client_address(metadata)?;
        Ok(self.geo_service.resolve(address))
    }
}

/// Read the client address from metadata. Blank values count as missing;
/// anything else is passed on exactly as received.
fn client_address(metadata: &dyn RequestMetadata) -> Result<&str, SendError> {
    metadata
        .get(IP_ADDRESS_HEADER)
        .filter(|address| !address.trim().is_empty())
        .ok_or(SendError::MissingRequiredField {
            field: IP_ADDRESS_HEADER,
        })
}
