mod prefix_geo_service;
mod static_localization_service;

pub use prefix_geo_service::{AddressMatcher, GeoRule, PrefixGeoService};
pub use static_localization_service::{
    StaticLocalizationService, ENGLISH_GREETING, RUSSIAN_GREETING,
};
