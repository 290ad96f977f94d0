use super::Coordinate;

/// Meters per degree of latitude (and of longitude at the equator)
const METERS_PER_DEGREE: f64 = 111320.0;

/// Local equirectangular projection from WGS84 to meters
///
/// - x = (lon - center_lon) * cos(center_lat) * 111320
/// - y = (lat - center_lat) * 111320
///
/// Good enough for hand-drawn shapes a few kilometers across, which is
/// what the planar area method is meant for.
#[derive(Debug, Clone)]
pub struct Projector {
    center_lat: f64,
    center_lon: f64,
    cos_lat: f64,
}

impl Projector {
    /// Create a projector whose origin is `center`
    pub fn new(center: Coordinate) -> Self {
        let lat = center.latitude();
        Self {
            center_lat: lat,
            center_lon: center.longitude(),
            cos_lat: lat.to_radians().cos(),
        }
    }

    /// Project a coordinate to local meters
    ///
    /// # Returns
    /// * `geo::Coord` with x east and y north of the projection center
    pub fn project(&self, coord: Coordinate) -> geo::Coord<f64> {
        let x = (coord.longitude() - self.center_lon) * self.cos_lat * METERS_PER_DEGREE;
        let y = (coord.latitude() - self.center_lat) * METERS_PER_DEGREE;

        geo::coord! { x: x, y: y }
    }

    pub fn project_points(&self, points: &[Coordinate]) -> Vec<geo::Coord<f64>> {
        points.iter().map(|&c| self.project(c)).collect()
    }
}
