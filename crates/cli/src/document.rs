//! Layer document: raw points per layer plus display flags.
//!
//! Only raw points and non-geometric attributes are stored. Hull and mesh are
//! derived after every load and never written back into a document.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hullmesh::Point;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    pub x: f64,
    pub y: f64,
}

impl From<RawPoint> for Point {
    fn from(p: RawPoint) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for RawPoint {
    fn from(p: Point) -> Self {
        RawPoint { x: p.x, y: p.y }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub points: Vec<RawPoint>,
}

impl Layer {
    /// Engine view of the layer's points, in document order.
    pub fn points(&self) -> Vec<Point> {
        self.points.iter().copied().map(Point::from).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub show_triangulation: bool,
}

/// Validation failures for a loaded document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentError {
    EmptyLayerName { layer: usize },
    NonFinitePoint { layer: String, index: usize },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::EmptyLayerName { layer } => {
                write!(f, "layer #{layer} has an empty name")
            }
            DocumentError::NonFinitePoint { layer, index } => {
                write!(f, "layer '{layer}': point #{index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for DocumentError {}

impl Document {
    /// Duplicate points are allowed; the engine tolerates them.
    pub fn validate(&self) -> std::result::Result<(), DocumentError> {
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.name.trim().is_empty() {
                return Err(DocumentError::EmptyLayerName { layer: i });
            }
            if let Some(index) = layer.points.iter().position(|p| !Point::from(*p).is_finite()) {
                return Err(DocumentError::NonFinitePoint {
                    layer: layer.name.clone(),
                    index,
                });
            }
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let doc: Document = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing layer document {}", path.display()))?;
        doc.validate()
            .with_context(|| format!("validating {}", path.display()))?;
        Ok(doc)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        crate::write_json(path, self)
    }
}
