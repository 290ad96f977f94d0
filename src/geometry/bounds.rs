use serde::{Deserialize, Serialize};

use super::{Coordinate, GeometryError};

/// Degrees added to each span so a camera fit never collapses to a point
pub const PADDING: f64 = 0.01;

/// Axis-aligned bounding box over a coordinate set
///
/// `center` is the midpoint of the extrema on each axis, not the vertex
/// centroid. The label marker and the camera fit both use it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
    pub center: Coordinate,
    /// `max_lat - min_lat + padding`
    pub lat_span: f64,
    /// `max_lng - min_lng + padding`
    pub lng_span: f64,
}

/// Camera viewport: a center plus the visible extent in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Bounds {
    /// Camera region framing these bounds
    pub fn region(&self) -> Region {
        Region {
            latitude: self.center.latitude(),
            longitude: self.center.longitude(),
            latitude_delta: self.lat_span,
            longitude_delta: self.lng_span,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

/// Bounds with the standard [`PADDING`]
///
/// # Returns
/// * `Err(GeometryError::EmptyInput)` - if `coordinates` is empty
pub fn compute_bounds(coordinates: &[Coordinate]) -> Result<Bounds, GeometryError> {
    compute_bounds_with_padding(coordinates, PADDING)
}

/// Bounds with a caller-chosen span padding in degrees
pub fn compute_bounds_with_padding(
    coordinates: &[Coordinate],
    padding: f64,
) -> Result<Bounds, GeometryError> {
    if !padding.is_finite() || padding < 0.0 {
        return Err(GeometryError::InvalidPadding(padding));
    }
    let first = coordinates.first().ok_or(GeometryError::EmptyInput)?;

    let mut min_lat = first.latitude();
    let mut max_lat = first.latitude();
    let mut min_lng = first.longitude();
    let mut max_lng = first.longitude();

    for c in &coordinates[1..] {
        min_lat = min_lat.min(c.latitude());
        max_lat = max_lat.max(c.latitude());
        min_lng = min_lng.min(c.longitude());
        max_lng = max_lng.max(c.longitude());
    }

    // Midpoints of in-range values stay in range
    let center = Coordinate::new((min_lat + max_lat) / 2.0, (min_lng + max_lng) / 2.0)?;

    let bounds = Bounds {
        min_lat,
        max_lat,
        min_lng,
        max_lng,
        center,
        lat_span: max_lat - min_lat + padding,
        lng_span: max_lng - min_lng + padding,
    };
    log::trace!(
        "bounds: {} points, center {}, span {:.5} x {:.5}",
        coordinates.len(),
        bounds.center,
        bounds.lat_span,
        bounds.lng_span
    );
    Ok(bounds)
}
