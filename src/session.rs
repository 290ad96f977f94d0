//! Drawing session: the state behind the map screen
//!
//! The UI forwards taps and button presses here and renders whatever the
//! session reports back. Flow:
//!
//! ```text
//! start_drawing -> tap* -> finish -> save(name)
//! ```
//!
//! Selecting a saved polygon yields the camera region that frames it.

use thiserror::Error;

use crate::config::FileConfig;
use crate::domain::{PolygonId, PolygonStore};
use crate::geometry::{AreaMethod, Coordinate, GeometryError, PADDING, Region, area_label};

/// Minimum vertex count for a shape to be saved
const MIN_VERTICES: usize = 3;

/// Camera view before anything is selected
pub const INITIAL_REGION: Region = Region {
    latitude: 37.78825,
    longitude: -122.4324,
    latitude_delta: 0.015,
    longitude_delta: 0.0121,
};

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("not in drawing mode")]
    NotDrawing,
    #[error("no finished shape is waiting for a name")]
    NotNaming,
    #[error("a polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },
    #[error("no polygon with id {0}")]
    UnknownPolygon(PolygonId),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// One row of the saved-shapes list
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: PolygonId,
    /// `"<name> - <area> SF"`
    pub label: String,
    pub area_square_feet: f64,
    pub selected: bool,
}

/// Label marker placed at the bounding-box center of a saved polygon
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: PolygonId,
    pub name: String,
    pub position: Coordinate,
}

#[derive(Debug)]
pub struct DrawingSession {
    store: PolygonStore,
    current: Vec<Coordinate>,
    drawing: bool,
    naming: bool,
    selected: Option<PolygonId>,
    padding: f64,
    method: AreaMethod,
    initial_region: Region,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(PADDING, AreaMethod::default())
    }
}

impl DrawingSession {
    pub fn new(padding: f64, method: AreaMethod) -> Self {
        Self {
            store: PolygonStore::new(),
            current: Vec::new(),
            drawing: false,
            naming: false,
            selected: None,
            padding,
            method,
            initial_region: INITIAL_REGION,
        }
    }

    /// Session using the padding, area method and starting view from `config`
    pub fn from_config(config: &FileConfig) -> Self {
        Self {
            initial_region: config.initial_region,
            ..Self::new(config.padding, config.area_method)
        }
    }

    pub fn initial_region(&self) -> Region {
        self.initial_region
    }

    /// Region framing the selected polygon, or the starting view
    pub fn camera_region(&self) -> Result<Region, SessionError> {
        match self.selected.and_then(|id| self.store.get(id)) {
            Some(polygon) => Ok(polygon.bounds(self.padding)?.region()),
            None => Ok(self.initial_region),
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn is_naming(&self) -> bool {
        self.naming
    }

    pub fn selected(&self) -> Option<PolygonId> {
        self.selected
    }

    pub fn store(&self) -> &PolygonStore {
        &self.store
    }

    /// In-progress vertices, for the live overlay
    pub fn current_outline(&self) -> &[Coordinate] {
        &self.current
    }

    /// Enter drawing mode with an empty outline
    pub fn start_drawing(&mut self) {
        self.current.clear();
        self.drawing = true;
        self.naming = false;
        log::debug!("session: drawing started");
    }

    /// Record a map tap. Taps outside drawing mode are ignored.
    pub fn tap(&mut self, coord: Coordinate) -> bool {
        if !self.drawing {
            return false;
        }
        self.current.push(coord);
        log::trace!("session: vertex {} at {}", self.current.len(), coord);
        true
    }

    /// Stop tracing and wait for a name
    pub fn finish(&mut self) -> Result<(), SessionError> {
        if !self.drawing {
            return Err(SessionError::NotDrawing);
        }
        if self.current.len() < MIN_VERTICES {
            return Err(SessionError::TooFewVertices {
                count: self.current.len(),
            });
        }
        self.drawing = false;
        self.naming = true;
        log::debug!(
            "session: outline finished with {} vertices",
            self.current.len()
        );
        Ok(())
    }

    /// Store the finished outline under `name`
    pub fn save(&mut self, name: impl Into<String>) -> Result<PolygonId, SessionError> {
        if !self.naming {
            return Err(SessionError::NotNaming);
        }
        let vertices = std::mem::take(&mut self.current);
        let id = self.store.insert(name, vertices);
        self.naming = false;
        self.drawing = false;
        log::debug!("session: saved polygon {}", id);
        Ok(id)
    }

    /// Remove a saved polygon. The selection is always cleared.
    pub fn delete(&mut self, id: PolygonId) -> Result<(), SessionError> {
        self.store
            .remove(id)
            .ok_or(SessionError::UnknownPolygon(id))?;
        self.selected = None;
        log::debug!("session: deleted polygon {}", id);
        Ok(())
    }

    /// Select a saved polygon and return the camera region that frames it
    pub fn select(&mut self, id: PolygonId) -> Result<Region, SessionError> {
        let polygon = self.store.get(id).ok_or(SessionError::UnknownPolygon(id))?;
        let region = polygon.bounds(self.padding)?.region();
        self.selected = Some(id);
        log::debug!("session: selected polygon {}", id);
        Ok(region)
    }

    pub fn entries(&self) -> Vec<ListEntry> {
        self.store
            .iter()
            .map(|p| {
                let area_square_feet = p.area_square_feet(self.method);
                ListEntry {
                    id: p.id,
                    label: area_label(&p.name, area_square_feet),
                    area_square_feet,
                    selected: self.selected == Some(p.id),
                }
            })
            .collect()
    }

    pub fn markers(&self) -> Result<Vec<Marker>, SessionError> {
        self.store
            .iter()
            .map(|p| {
                Ok(Marker {
                    id: p.id,
                    name: p.name.clone(),
                    position: p.bounds(self.padding)?.center,
                })
            })
            .collect()
    }
}
