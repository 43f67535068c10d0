//! geo-greeter Library
//!
//! Resolves a client address to a location and greets the client in the
//! language of the location's country. Exposed as a library for the
//! binary and for integration tests.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use adapters::inbound::HttpServer;
pub use adapters::outbound::{GeoRule, PrefixGeoService, StaticLocalizationService};
pub use application::{MessageSender, SendError, IP_ADDRESS_HEADER};
pub use config::{load_config, Config, ConfigError};
pub use domain::entities::Location;
pub use domain::errors::{GeoError, LocalizationError};
pub use domain::ports::{GeoService, LocalizationService, RequestMetadata};
pub use domain::value_objects::Country;
