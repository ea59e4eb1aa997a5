//! Planar primitives and the numerical leaves of the engine.
//!
//! Purpose
//! - `Point` / `Vector`: positions and displacements as distinct types.
//! - `Orientation`: exact, tolerance-free turn classification of a triple.
//! - `Matrix`: small dense matrix whose determinant backs the incircle test.
//! - `rand`: reproducible point sets for tests, benches and the CLI.
//!
//! Everything here is pure and allocation-light; the hull and mesh modules
//! build on these leaves only.
//!
//! Code cross-refs: `hull::convex_hull`, `mesh::incircle`

mod matrix;
mod orient;
pub mod rand;
mod types;
mod util;

pub use matrix::Matrix;
pub use orient::{orientation, segments_cross, Orientation};
pub use types::{Point, Vector};
pub use util::{barycenter, sum};
