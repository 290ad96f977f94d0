//! mapdraw - area and camera framing for polygons traced on a map

pub mod config;
pub mod domain;
pub mod geometry;
pub mod session;

pub use domain::{NamedPolygon, PolygonId, PolygonStore};
pub use geometry::{Bounds, Coordinate, GeometryError, Region, compute_area, compute_bounds};
pub use session::{DrawingSession, SessionError};
