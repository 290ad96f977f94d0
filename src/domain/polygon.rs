use std::fmt;

use crate::geometry::{
    AreaMethod, Bounds, Coordinate, GeometryError, area_label, compute_area_with,
    compute_bounds_with_padding,
};

/// Identity of a saved polygon, assigned by [`PolygonStore`](super::PolygonStore)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolygonId(pub(crate) u64);

impl fmt::Display for PolygonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A traced shape together with the name the user gave it
#[derive(Debug, Clone, PartialEq)]
pub struct NamedPolygon {
    pub id: PolygonId,
    pub name: String,
    /// Vertices in traced order, not closed
    pub vertices: Vec<Coordinate>,
}

impl NamedPolygon {
    pub fn area_square_feet(&self, method: AreaMethod) -> f64 {
        compute_area_with(&self.vertices, method)
    }

    pub fn bounds(&self, padding: f64) -> Result<Bounds, GeometryError> {
        compute_bounds_with_padding(&self.vertices, padding)
    }

    /// `"<name> - <area> SF"`
    pub fn label(&self, method: AreaMethod) -> String {
        area_label(&self.name, self.area_square_feet(method))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lot() -> NamedPolygon {
        NamedPolygon {
            id: PolygonId(7),
            name: "Lot".to_string(),
            vertices: [
                (37.0, -122.0),
                (37.0, -121.999),
                (37.001, -121.999),
                (37.001, -122.0),
            ]
            .iter()
            .map(|&(lat, lon)| Coordinate::new(lat, lon).unwrap())
            .collect(),
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(lot().label(AreaMethod::Spherical), "Lot - 106526.54 SF");
    }

    #[test]
    fn test_bounds_center() {
        let bounds = lot().bounds(0.01).unwrap();
        assert!((bounds.center.latitude() - 37.0005).abs() < 1e-9);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(PolygonId(3).to_string(), "#3");
    }
}
