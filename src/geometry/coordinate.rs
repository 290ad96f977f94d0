use serde::{Deserialize, Serialize};
use std::fmt;

use super::GeometryError;

/// A WGS84 position in degrees
///
/// Fields are private so every value in circulation has passed range
/// validation, whether it came from [`Coordinate::new`] or from a
/// deserialized tap payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TapPayload")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

/// Wire shape of a map tap event: `{"latitude": .., "longitude": ..}`
#[derive(Debug, Deserialize)]
struct TapPayload {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<TapPayload> for Coordinate {
    type Error = GeometryError;

    fn try_from(payload: TapPayload) -> Result<Self, Self::Error> {
        Coordinate::new(payload.latitude, payload.longitude)
    }
}

impl Coordinate {
    /// Create a coordinate, rejecting non-finite or out-of-range values
    ///
    /// # Arguments
    /// * `latitude` - degrees in [-90, 90]
    /// * `longitude` - degrees in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeometryError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeometryError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeometryError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Convert to a `geo` coordinate with x = longitude, y = latitude
    pub fn to_geo(self) -> geo::Coord<f64> {
        geo::coord! { x: self.longitude, y: self.latitude }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
