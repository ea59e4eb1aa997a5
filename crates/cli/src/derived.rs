//! Derived geometry per layer: hull polygon and mesh index triples.

use hullmesh::api::{convex_hull, triangulate_with, MeshCfg};
use serde::Serialize;

use crate::document::{Document, Layer, RawPoint};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerHull {
    pub name: String,
    pub hull: Vec<RawPoint>,
}

/// Mesh over the layer's own point list; `triangles` index into it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshOut {
    pub triangulated: bool,
    pub triangles: Vec<[usize; 3]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerMesh {
    pub name: String,
    pub vertices: Vec<RawPoint>,
    #[serde(flatten)]
    pub mesh: MeshOut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedLayer {
    pub name: String,
    pub selected: bool,
    pub points: Vec<RawPoint>,
    pub hull: Vec<RawPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh: Option<MeshOut>,
}

pub fn hull_of(layer: &Layer) -> LayerHull {
    LayerHull {
        name: layer.name.clone(),
        hull: convex_hull(&layer.points())
            .into_iter()
            .map(RawPoint::from)
            .collect(),
    }
}

pub fn mesh_of(layer: &Layer, cfg: MeshCfg) -> MeshOut {
    let pts = layer.points();
    match triangulate_with(&pts, cfg).and_then(|m| m.to_indices(&pts)) {
        Some(triangles) => MeshOut {
            triangulated: true,
            triangles,
        },
        None => MeshOut {
            triangulated: false,
            triangles: Vec::new(),
        },
    }
}

/// Recompute everything derived from the raw points of `doc`.
pub fn derive_document(doc: &Document, with_mesh: bool, cfg: MeshCfg) -> Vec<DerivedLayer> {
    let with_mesh = with_mesh || doc.show_triangulation;
    doc.layers
        .iter()
        .map(|layer| DerivedLayer {
            name: layer.name.clone(),
            selected: layer.selected,
            points: layer.points.clone(),
            hull: hull_of(layer).hull,
            mesh: with_mesh.then(|| mesh_of(layer, cfg)),
        })
        .collect()
}
