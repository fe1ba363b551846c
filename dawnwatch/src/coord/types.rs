//! Coordinate type definitions

use std::fmt;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Number of decimal places a coordinate component is formatted with.
pub const COORDINATE_PRECISION: usize = 7;

/// A geographic point in decimal degrees.
///
/// Both components are pre-formatted strings with exactly
/// [`COORDINATE_PRECISION`] decimal places, ready to be sent as query
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Latitude in decimal degrees, -90 to 90, 0 at the equator
    pub latitude: String,
    /// Longitude in decimal degrees, -180 to 180, 0 at the prime meridian
    pub longitude: String,
}

impl Coordinate {
    /// Creates a coordinate from decimal-degree values, formatting both
    /// components to [`COORDINATE_PRECISION`] decimal places.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: format!("{latitude:.prec$}", prec = COORDINATE_PRECISION),
            longitude: format!("{longitude:.prec$}", prec = COORDINATE_PRECISION),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
