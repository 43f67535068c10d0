mod geo_service;
mod localization_service;
mod request_metadata;

pub use geo_service::GeoService;
pub use localization_service::LocalizationService;
pub use request_metadata::RequestMetadata;
