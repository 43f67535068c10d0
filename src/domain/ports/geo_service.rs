//! Geo Service Port
//!
//! Defines the interface for resolving client addresses to geographic locations.

use crate::domain::entities::Location;
use crate::domain::errors::GeoError;

/// Resolver for client address to geographic location.
///
/// This is an outbound port that abstracts the lookup strategy.
/// Implementations may use fixed prefix rules or a real GeoIP database.
pub trait GeoService: Send + Sync {
    /// Resolve an address string to a location.
    ///
    /// Never fails: an address the implementation knows nothing about
    /// resolves to [`Location::unknown`].
    fn resolve(&self, address: &str) -> Location;

    /// Resolve a coordinate pair to a location.
    fn resolve_by_coordinates(&self, latitude: f64, longitude: f64)
        -> Result<Location, GeoError>;
}
