//! Curated API surface (unstable).
//!
//! - Convenience re-exports for the CLI, benches and examples. Breaking changes
//!   follow the module tree.

// Primitives and leaves
pub use crate::geom2::{
    barycenter, orientation, segments_cross, sum, Matrix, Orientation, Point, Vector,
};
// Sampling
pub use crate::geom2::rand::{
    draw_points, PointCloudCfg, PointLayout, ReplayToken as CloudReplay,
};
// Hull
pub use crate::hull::{convex_hull, polar_anchor, sort_by_polar_angle};
// Mesh
pub use crate::mesh::{
    find_third_vertex, find_third_vertex_where, incircle, is_valid_triangle, lifted_determinant,
    seed_triangle, triangulate, triangulate_with, CircleBoundary, MeshCfg, Triangle,
    Triangulation,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_cloud_flows_through_hull_and_mesh() {
        let cfg = PointCloudCfg {
            count: 24,
            integer_coords: true,
            ..PointCloudCfg::default()
        };
        let pts = draw_points(cfg, CloudReplay { seed: 7, index: 0 });
        assert_eq!(pts.len(), 24);
        let hull = convex_hull(&pts);
        assert!(hull.len() >= 3);
        let mesh = triangulate(&pts).expect("random cloud triangulates");
        assert!(!mesh.is_empty());
        for t in &mesh {
            for &p in &pts {
                if !t.contains_vertex(p) {
                    assert!(incircle(t.a(), t.b(), t.c(), p) >= 0.0);
                }
            }
        }
    }
}
