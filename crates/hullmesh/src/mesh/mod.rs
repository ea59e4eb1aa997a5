//! Delaunay-style triangulation by flood fill.
//!
//! Purpose
//! - Accept a triangle only when its circumcircle holds no other input point
//!   (lifted 4×4 determinant, orientation-adjusted).
//! - Grow the mesh breadth-first: for each edge of an accepted triangle, pick
//!   the first valid third vertex across that edge.
//!
//! Model
//! - Seed: `a = points[0]`, `b` scanned in input order, `c` the first valid
//!   third vertex for `(a, b)`.
//! - Edges are crossed in the order `bc`, `ac`, `ab`. With
//!   `MeshCfg::opposite_side`, the new vertex must lie across the edge from the
//!   apex we came from, and the runner keeps the mesh planar: each undirected
//!   edge carries at most one triangle per side and new edges never cross old
//!   ones. Candidates breaking either rule are skipped in favour of the next
//!   valid vertex. This is what settles cocircular ties (lattice cells, points
//!   on one circle) into a single tiling of the hull.
//! - A triangle is identified by its vertex set. Each is queued at most once;
//!   output keeps acceptance order.
//! - On-circle points are admitted by default (`CircleBoundary::Inclusive`), so
//!   cocircular inputs such as a square still triangulate. With
//!   `CircleBoundary::Exclusive` such inputs yield `None`.
//!
//! Cost: each edge crossing scans every point and runs the full predicate per
//! candidate, O(n²) per crossing. Intended for small and medium inputs.
//!
//! Code cross-refs: `geom2::{Matrix, Orientation}`, `hull::convex_hull`

mod flood;
mod predicate;
mod types;

pub use flood::{seed_triangle, triangulate, triangulate_with};
pub use predicate::{
    find_third_vertex, find_third_vertex_where, incircle, is_valid_triangle, lifted_determinant,
};
pub use types::{CircleBoundary, MeshCfg, Triangle, Triangulation};
