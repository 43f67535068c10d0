//! Prefix Geo Service
//!
//! Implements GeoService with a fixed table of address rules.

use crate::domain::entities::Location;
use crate::domain::errors::GeoError;
use crate::domain::ports::GeoService;
use crate::domain::value_objects::Country;

/// How a rule matches an address string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressMatcher {
    /// The whole address must be equal.
    Exact(String),
    /// The address must start with this text (e.g. `"172."`).
    Prefix(String),
}

impl AddressMatcher {
    pub fn matches(&self, address: &str) -> bool {
        match self {
            Self::Exact(expected) => address == expected,
            Self::Prefix(prefix) => address.starts_with(prefix.as_str()),
        }
    }
}

/// A single lookup rule: addresses matching `matcher` resolve to `location`.
///
/// Locations without a country are stored as [`Location::unknown`].
#[derive(Debug, Clone)]
pub struct GeoRule {
    pub matcher: AddressMatcher,
    pub location: Location,
}

impl GeoRule {
    pub fn exact(address: impl Into<String>, location: Location) -> Self {
        Self {
            matcher: AddressMatcher::Exact(address.into()),
            location: location.normalized(),
        }
    }

    pub fn prefix(prefix: impl Into<String>, location: Location) -> Self {
        Self {
            matcher: AddressMatcher::Prefix(prefix.into()),
            location: location.normalized(),
        }
    }
}

/// Rule-based geo service.
///
/// Rules are checked in order and the first match wins, so exact
/// addresses and reserved ranges have to come before the broad prefixes
/// that would otherwise swallow them.
#[derive(Debug, Clone)]
pub struct PrefixGeoService {
    rules: Vec<GeoRule>,
}

impl PrefixGeoService {
    pub fn new(rules: Vec<GeoRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| GeoRule {
                matcher: rule.matcher,
                location: rule.location.normalized(),
            })
            .collect();
        Self { rules }
    }

    /// The built-in rule table.
    pub fn builtin_rules() -> Vec<GeoRule> {
        vec![
            // Loopback is reserved and never geolocated
            GeoRule::prefix("127.", Location::unknown()),
            GeoRule::exact(
                "172.0.32.11",
                Location::address("Moscow", Country::Russia, "Lenina", 15),
            ),
            GeoRule::exact(
                "96.44.183.149",
                Location::address("New York", Country::Usa, "10th Avenue", 32),
            ),
            GeoRule::prefix("172.", Location::city("Moscow", Country::Russia)),
            GeoRule::prefix("96.", Location::city("New York", Country::Usa)),
        ]
    }

    pub fn rules(&self) -> &[GeoRule] {
        &self.rules
    }
}

impl Default for PrefixGeoService {
    fn default() -> Self {
        Self::new(Self::builtin_rules())
    }
}

impl GeoService for PrefixGeoService {
    fn resolve(&self, address: &str) -> Location {
        match self.rules.iter().find(|rule| rule.matcher.matches(address)) {
            Some(rule) => {
                tracing::debug!(
                    "address {} matched {:?} -> {:?}",
                    address,
                    rule.matcher,
                    rule.location.country
                );
                rule.location.clone()
            }
            None => {
                tracing::debug!("address {} matched no rule, region unknown", address);
                Location::unknown()
            }
        }
    }

    fn resolve_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Location, GeoError> {
        tracing::debug!(
            "rejecting coordinate lookup ({}, {})",
            latitude,
            longitude
        );
        Err(GeoError::UnsupportedOperation {
            operation: "resolve_by_coordinates",
        })
    }
}
