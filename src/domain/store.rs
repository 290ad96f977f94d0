use super::{NamedPolygon, PolygonId};
use crate::geometry::Coordinate;

/// Ordered, in-memory collection of saved polygons
///
/// Ids increase monotonically and are never reused, so a stale id held by
/// the UI cannot address a polygon saved later.
#[derive(Debug, Default)]
pub struct PolygonStore {
    polygons: Vec<NamedPolygon>,
    next_id: u64,
}

impl PolygonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a polygon and return its id
    pub fn insert(&mut self, name: impl Into<String>, vertices: Vec<Coordinate>) -> PolygonId {
        let id = PolygonId(self.next_id);
        self.next_id += 1;
        self.polygons.push(NamedPolygon {
            id,
            name: name.into(),
            vertices,
        });
        id
    }

    /// Remove a polygon, keeping the order of the rest
    pub fn remove(&mut self, id: PolygonId) -> Option<NamedPolygon> {
        let index = self.polygons.iter().position(|p| p.id == id)?;
        Some(self.polygons.remove(index))
    }

    pub fn get(&self, id: PolygonId) -> Option<&NamedPolygon> {
        self.polygons.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedPolygon> {
        self.polygons.iter()
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}
