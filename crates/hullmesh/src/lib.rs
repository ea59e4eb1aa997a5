//! Planar hull and mesh engine.
//!
//! - `geom2`: primitives, orientation predicate, determinant utility, sampler.
//! - `hull`: Graham-scan convex hull.
//! - `mesh`: empty-circumcircle predicate and flood-fill triangulation.
//!
//! All operations are pure functions over a borrowed point slice. Degenerate
//! inputs give empty or `None` results, never a panic.
//!
//! API Policy
//! - `api` is the curated surface for the CLI and benches. Module paths may
//!   move; prefer `api` or `prelude` in callers.

pub mod api;
pub mod geom2;
pub mod hull;
pub mod mesh;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Orientation, Point, Vector};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_points, PointCloudCfg, PointLayout, ReplayToken};
    pub use crate::geom2::{orientation, Orientation, Point, Vector};
    pub use crate::hull::convex_hull;
    pub use crate::mesh::{triangulate, triangulate_with, MeshCfg, Triangle, Triangulation};
}
