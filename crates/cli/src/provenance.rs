//! Sidecar describing how a derived artifact came about: engine version,
//! mesh settings, the input document and per-layer counts.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};

use crate::derived::DerivedLayer;
use crate::document::{Document, Layer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callsite {
    pub file: String,
    pub line: u32,
}

/// The layer document a run read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub path: String,
    pub bytes: u64,
    pub layers: usize,
    pub show_triangulation: bool,
}

impl InputRecord {
    pub fn read(path: &Path, doc: &Document) -> Result<Self> {
        let meta = fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
        Ok(Self {
            path: path.to_string_lossy().into_owned(),
            bytes: meta.len(),
            layers: doc.layers.len(),
            show_triangulation: doc.show_triangulation,
        })
    }
}

/// Point counts in, hull and mesh sizes out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerRecord {
    pub name: String,
    pub points: usize,
    /// Duplicates collapse in the engine; this is what it actually saw.
    pub distinct_points: usize,
    pub hull_vertices: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triangles: Option<usize>,
}

impl LayerRecord {
    pub fn of(layer: &Layer, derived: &DerivedLayer) -> Self {
        let distinct: std::collections::HashSet<_> = layer.points().into_iter().collect();
        Self {
            name: layer.name.clone(),
            points: layer.points.len(),
            distinct_points: distinct.len(),
            hull_vertices: derived.hull.len(),
            triangles: derived.mesh.as_ref().map(|m| m.triangles.len()),
        }
    }
}

/// Provenance block: engine version, parameters, input and outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub engine_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callsite: Option<Callsite>,
    pub params: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<InputRecord>,
    #[serde(default)]
    pub layers: Vec<LayerRecord>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn new(params: Value) -> Self {
        Self {
            engine_version: hullmesh::VERSION.to_string(),
            callsite: None,
            params,
            input: None,
            layers: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Record for one `derive` run over `doc`, read from `input`.
    pub fn of_run(
        input: &Path,
        doc: &Document,
        derived: &[DerivedLayer],
        params: Value,
    ) -> Result<Self> {
        Ok(Self {
            input: Some(InputRecord::read(input, doc)?),
            layers: doc
                .layers
                .iter()
                .zip(derived)
                .map(|(layer, d)| LayerRecord::of(layer, d))
                .collect(),
            ..Self::new(params)
        })
    }
}

/// Write `record` to `<artifact stem>.provenance.json` next to `artifact`,
/// stamping the caller and the artifact path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, record: Provenance) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    let callsite = Location::caller();
    let doc = Provenance {
        callsite: Some(Callsite {
            file: callsite.file().to_string(),
            line: callsite.line(),
        }),
        outputs: vec![artifact.to_string_lossy().into_owned()],
        ..record
    };
    crate::write_json(&path, &doc)?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}
