//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the greeter domain.
//! They have no external dependencies and contain only business logic.

use crate::domain::value_objects::Country;
use serde::{Deserialize, Serialize};

/// Geographic location resolved from a client address.
///
/// Every field may be unknown. An address that matches no lookup rule
/// resolves to [`Location::unknown`], which is a normal outcome rather
/// than a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// City name
    pub city: Option<String>,
    /// Country the address belongs to
    pub country: Option<Country>,
    /// Street name, when the lookup is precise enough
    pub street: Option<String>,
    /// Building number (0 when unknown)
    #[serde(default)]
    pub building: u32,
}

impl Location {
    pub fn new(
        city: Option<String>,
        country: Option<Country>,
        street: Option<String>,
        building: u32,
    ) -> Self {
        Self {
            city,
            country,
            street,
            building,
        }
    }

    /// A location with only city and country known.
    pub fn city(city: impl Into<String>, country: Country) -> Self {
        Self::new(Some(city.into()), Some(country), None, 0)
    }

    /// A fully known location down to the building.
    pub fn address(
        city: impl Into<String>,
        country: Country,
        street: impl Into<String>,
        building: u32,
    ) -> Self {
        Self::new(
            Some(city.into()),
            Some(country),
            Some(street.into()),
            building,
        )
    }

    /// The unknown region: every field unset.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Drop every detail of a location that has no country.
    ///
    /// A city or street without a country is not a resolved region, so
    /// it collapses to [`Location::unknown`].
    pub fn normalized(self) -> Self {
        if self.country.is_none() {
            Self::unknown()
        } else {
            self
        }
    }

    /// Whether the lookup produced no information at all.
    pub fn is_unknown(&self) -> bool {
        self.country.is_none()
            && self.city.is_none()
            && self.street.is_none()
            && self.building == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_location_has_no_fields() {
        let location = Location::unknown();

        assert_eq!(location.city, None);
        assert_eq!(location.country, None);
        assert_eq!(location.street, None);
        assert_eq!(location.building, 0);
        assert!(location.is_unknown());
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Location::default(), Location::unknown());
    }

    #[test]
    fn test_city_location_leaves_street_unset() {
        let location = Location::city("Moscow", Country::Russia);

        assert_eq!(location.city.as_deref(), Some("Moscow"));
        assert_eq!(location.country, Some(Country::Russia));
        assert_eq!(location.street, None);
        assert_eq!(location.building, 0);
        assert!(!location.is_unknown());
    }

    #[test]
    fn test_address_location() {
        let location = Location::address("New York", Country::Usa, "10th Avenue", 32);

        assert_eq!(location.city.as_deref(), Some("New York"));
        assert_eq!(location.country, Some(Country::Usa));
        assert_eq!(location.street.as_deref(), Some("10th Avenue"));
        assert_eq!(location.building, 32);
    }

    #[test]
    fn test_normalized_drops_details_without_country() {
        let location = Location::new(
            Some("Nowhere".to_string()),
            None,
            Some("Main".to_string()),
            7,
        );

        let normalized = location.normalized();

        assert_eq!(normalized, Location::unknown());
        assert!(normalized.is_unknown());
    }

    #[test]
    fn test_normalized_keeps_located_addresses() {
        let location = Location::address("Moscow", Country::Russia, "Lenina", 15);
        assert_eq!(location.clone().normalized(), location);
    }

    #[test]
    fn test_location_json_shape() {
        let location = Location::address("Moscow", Country::Russia, "Lenina", 15);
        let json = serde_json::to_value(&location).unwrap();

        assert_eq!(json["city"], "Moscow");
        assert_eq!(json["country"], "RUSSIA");
        assert_eq!(json["street"], "Lenina");
        assert_eq!(json["building"], 15);
    }

    #[test]
    fn test_unknown_location_json_has_nulls() {
        let json = serde_json::to_value(Location::unknown()).unwrap();

        assert!(json["city"].is_null());
        assert!(json["country"].is_null());
        assert!(json["street"].is_null());
        assert_eq!(json["building"], 0);
    }
}
