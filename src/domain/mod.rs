pub mod polygon;
pub mod store;

pub use polygon::{NamedPolygon, PolygonId};
pub use store::PolygonStore;
