//! Polygon area in square feet
//!
//! Vertices are treated as (x = longitude, y = latitude). The ring is closed
//! before measuring, the area is taken in square meters and then converted
//! to square feet for display.
//!
//! Self-intersecting rings are not rejected: the result is whatever the
//! ring formula yields for the implied ring, as an absolute value.

use geo::orient::Direction;
use geo::{Area, ChamberlainDuquetteArea, GeodesicArea, LineString, Orient, Polygon};
use serde::{Deserialize, Serialize};

use super::{Coordinate, Projector, compute_bounds};

/// 1 m² = 10.7639 ft²
pub const SQUARE_FEET_PER_SQUARE_METER: f64 = 10.7639;

/// How a ring of WGS84 vertices is turned into square meters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AreaMethod {
    /// Chamberlain-Duquette area on a sphere of radius 6378137 m
    #[default]
    Spherical,
    /// Karney's ellipsoidal area on WGS84
    Geodesic,
    /// Shoelace formula after a local equirectangular projection
    Planar,
}

/// Return the ring with its first vertex repeated at the end
///
/// Already-closed input comes back unchanged, so closing twice never adds
/// a second closing edge.
pub fn close_ring(polygon: &[Coordinate]) -> Vec<Coordinate> {
    let mut ring = polygon.to_vec();
    if let (Some(&first), Some(&last)) = (polygon.first(), polygon.last())
        && first != last
    {
        ring.push(first);
    }
    ring
}

/// Unrounded area in square meters, 0.0 for fewer than 3 vertices
pub fn area_square_meters(polygon: &[Coordinate], method: AreaMethod) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }

    let ring = close_ring(polygon);

    let area = match method {
        AreaMethod::Spherical => to_geo_polygon(&ring).chamberlain_duquette_unsigned_area(),
        AreaMethod::Geodesic => to_geo_polygon(&ring).geodesic_area_signed().abs(),
        AreaMethod::Planar => {
            let center = compute_bounds(polygon).map_or(polygon[0], |b| b.center);
            let projector = Projector::new(center);
            let exterior = LineString::from(projector.project_points(&ring));
            Polygon::new(exterior, vec![]).unsigned_area()
        }
    };

    log::trace!(
        "area: {} vertices, {:?} -> {:.3} m²",
        polygon.len(),
        method,
        area
    );
    area
}

/// Area in square feet using the default [`AreaMethod`], rounded to 2 decimals
pub fn compute_area(polygon: &[Coordinate]) -> f64 {
    compute_area_with(polygon, AreaMethod::default())
}

/// Area in square feet using `method`, rounded to 2 decimals
///
/// Degenerate input (fewer than 3 vertices, or a ring enclosing nothing)
/// yields 0.0 so callers can ask before a shape is finished.
pub fn compute_area_with(polygon: &[Coordinate], method: AreaMethod) -> f64 {
    let square_feet = area_square_meters(polygon, method) * SQUARE_FEET_PER_SQUARE_METER;
    (square_feet * 100.0).round() / 100.0
}

/// Render an area with exactly two decimals
pub fn format_area(square_feet: f64) -> String {
    format!("{:.2}", square_feet)
}

/// List label in the form `"<name> - <area> SF"`
pub fn area_label(name: &str, square_feet: f64) -> String {
    format!("{} - {} SF", name, format_area(square_feet))
}

fn to_geo_polygon(ring: &[Coordinate]) -> Polygon<f64> {
    let exterior: LineString<f64> = ring.iter().map(|c| c.to_geo()).collect();
    Polygon::new(exterior, vec![]).orient(Direction::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EARTH_RADIUS: f64 = 6378137.0;

    fn coords(points: &[(f64, f64)]) -> Vec<Coordinate> {
        points
            .iter()
            .map(|&(lat, lon)| Coordinate::new(lat, lon).unwrap())
            .collect()
    }

    fn fixture() -> Vec<Coordinate> {
        coords(&[
            (37.0, -122.0),
            (37.0, -121.999),
            (37.001, -121.999),
            (37.001, -122.0),
        ])
    }

    #[test]
    fn test_regression_fixture() {
        let area = compute_area(&fixture());
        assert!((area - 106526.54).abs() < 0.011, "got {}", area);
    }

    #[test]
    fn test_rectangle_matches_analytic_area() {
        // A lat/lng rectangle on the sphere has area R² * dλ * (sin φ2 - sin φ1)
        let expected_m2 = EARTH_RADIUS
            * EARTH_RADIUS
            * 0.001_f64.to_radians()
            * (37.001_f64.to_radians().sin() - 37.0_f64.to_radians().sin());
        let expected = expected_m2 * SQUARE_FEET_PER_SQUARE_METER;

        let area = compute_area(&fixture());
        assert!((area - expected).abs() / expected < 1e-6);
    }

    #[test]
    fn test_rotation_invariant() {
        let base = compute_area(&fixture());
        for shift in 1..4 {
            let mut rotated = fixture();
            rotated.rotate_left(shift);
            assert!((compute_area(&rotated) - base).abs() < 0.02);
        }
    }

    #[test]
    fn test_direction_invariant() {
        let mut reversed = fixture();
        reversed.reverse();
        assert!((compute_area(&reversed) - compute_area(&fixture())).abs() < 0.02);
    }

    #[test]
    fn test_closed_input_not_double_counted() {
        let mut closed = fixture();
        closed.push(closed[0]);

        assert_eq!(close_ring(&closed).len(), closed.len());
        assert_eq!(compute_area(&closed), compute_area(&fixture()));
    }

    #[test]
    fn test_close_ring_appends_first() {
        let open = fixture();
        let ring = close_ring(&open);

        assert_eq!(ring.len(), open.len() + 1);
        assert_eq!(ring.first(), ring.last());
        assert_eq!(open.len(), 4);
    }

    #[test]
    fn test_close_ring_empty() {
        assert!(close_ring(&[]).is_empty());
    }

    #[test]
    fn test_two_distinct_vertices_is_zero() {
        let line = coords(&[(37.0, -122.0), (37.001, -121.999), (37.0, -122.0)]);
        assert_eq!(compute_area(&line), 0.0);

        let doubled = coords(&[(37.0, -122.0), (37.001, -121.999), (37.001, -121.999)]);
        assert_eq!(compute_area(&doubled), 0.0);
    }

    #[test]
    fn test_fewer_than_three_vertices_is_zero() {
        assert_eq!(compute_area(&[]), 0.0);
        assert_eq!(compute_area(&coords(&[(37.0, -122.0)])), 0.0);
        assert_eq!(
            compute_area(&coords(&[(37.0, -122.0), (37.001, -121.999)])),
            0.0
        );
    }

    #[test]
    fn test_collinear_is_zero() {
        let line = coords(&[(37.0, -122.0), (37.0005, -122.0), (37.001, -122.0)]);
        for method in [AreaMethod::Spherical, AreaMethod::Geodesic, AreaMethod::Planar] {
            assert_eq!(compute_area_with(&line, method), 0.0);
        }
    }

    #[test]
    fn test_geodesic_close_to_spherical() {
        let spherical = compute_area(&fixture());
        let geodesic = compute_area_with(&fixture(), AreaMethod::Geodesic);
        assert!((geodesic - spherical).abs() / spherical < 0.01);
    }

    #[test]
    fn test_planar_close_to_spherical() {
        let spherical = compute_area(&fixture());
        let planar = compute_area_with(&fixture(), AreaMethod::Planar);
        assert!((planar - spherical).abs() / spherical < 0.001);
    }

    #[test]
    fn test_self_intersecting_is_finite() {
        let bowtie = coords(&[
            (37.0, -122.0),
            (37.001, -121.999),
            (37.0, -121.999),
            (37.001, -122.0),
        ]);
        let area = compute_area(&bowtie);
        assert!(area.is_finite());
        assert!(area >= 0.0);
        assert!(area < compute_area(&fixture()));
    }

    #[test]
    fn test_input_untouched() {
        let polygon = fixture();
        let before = polygon.clone();
        let _ = compute_area(&polygon);
        assert_eq!(polygon, before);
    }

    #[test]
    fn test_format_and_label() {
        assert_eq!(format_area(106526.54), "106526.54");
        assert_eq!(format_area(0.0), "0.00");
        assert_eq!(area_label("Backyard", 1234.5), "Backyard - 1234.50 SF");
    }
}
