pub mod area;
pub mod bounds;
pub mod coordinate;
pub mod projection;

pub use area::{
    AreaMethod, SQUARE_FEET_PER_SQUARE_METER, area_label, area_square_meters, close_ring,
    compute_area, compute_area_with, format_area,
};
pub use bounds::{Bounds, PADDING, Region, compute_bounds, compute_bounds_with_padding};
pub use coordinate::Coordinate;
pub use projection::Projector;

use thiserror::Error;

/// Contract violations reported by the geometry functions
///
/// Degenerate shapes are not errors: they produce a zero area or a
/// padding-only bounding box.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("at least one coordinate is required")]
    EmptyInput,
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),
    #[error("padding {0} must be a finite, non-negative number of degrees")]
    InvalidPadding(f64),
}
