//! Breadth-first flood fill from a seed triangle across shared edges.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::geom2::{segments_cross, Orientation, Point};

use super::predicate::{find_third_vertex, find_third_vertex_where};
use super::types::{MeshCfg, Triangle, Triangulation};

/// Triangulate with the default configuration.
pub fn triangulate(points: &[Point]) -> Option<Triangulation> {
    triangulate_with(points, MeshCfg::default())
}

/// Flood-fill triangulation of `points`.
///
/// Returns `None` for fewer than three points or when no valid seed exists
/// (all points collinear or coincident).
pub fn triangulate_with(points: &[Point], cfg: MeshCfg) -> Option<Triangulation> {
    if points.len() < 3 {
        debug!(points = points.len(), "too few points to triangulate");
        return None;
    }
    let Some(seed) = seed_triangle(points, cfg) else {
        debug!(points = points.len(), "no valid seed triangle");
        return None;
    };
    let mesh = FloodRunner::new(points, cfg).run(seed);
    debug!(
        points = points.len(),
        triangles = mesh.len(),
        "triangulation complete"
    );
    Some(mesh)
}

/// First valid triangle `(a, b, c)` with `a = points[0]` and `b` scanned in input order.
pub fn seed_triangle(points: &[Point], cfg: MeshCfg) -> Option<Triangle> {
    let a = *points.first()?;
    points.iter().copied().find_map(|b| {
        find_third_vertex(points, a, b, None, cfg).and_then(|c| Triangle::new(a, b, c))
    })
}

/// Undirected edge, endpoints in `Point::total_cmp` order.
type EdgeKey = (Point, Point);

fn edge_key(u: Point, v: Point) -> EdgeKey {
    if u.total_cmp(&v).is_le() {
        (u, v)
    } else {
        (v, u)
    }
}

/// Flood runner carrying the work queue and accumulators.
///
/// With `cfg.opposite_side` the runner keeps the mesh planar: every
/// undirected edge holds at most one triangle per side, and a new edge may
/// not cross an existing one. A candidate failing either check is skipped and
/// the scan moves on to the next valid vertex.
struct FloodRunner<'a> {
    points: &'a [Point],
    cfg: MeshCfg,
    queue: VecDeque<Triangle>,
    seen: HashSet<Triangle>,
    /// Edge plus the side its triangle lies on.
    occupied: HashSet<(EdgeKey, Orientation)>,
    edges: Vec<EdgeKey>,
    out: Triangulation,
}

impl<'a> FloodRunner<'a> {
    fn new(points: &'a [Point], cfg: MeshCfg) -> Self {
        Self {
            points,
            cfg,
            queue: VecDeque::new(),
            seen: HashSet::new(),
            occupied: HashSet::new(),
            edges: Vec::new(),
            out: Triangulation::new(),
        }
    }

    fn run(mut self, seed: Triangle) -> Triangulation {
        self.enqueue(seed);
        while let Some(t) = self.queue.pop_front() {
            self.out.insert(t);
            trace!(?t, accepted = self.out.len(), "accepted triangle");
            for (p, q, apex) in t.edges() {
                let Some(c) = self.cross_edge(p, q, apex) else {
                    continue;
                };
                if let Some(next) = Triangle::new(p, q, c) {
                    self.enqueue(next);
                }
            }
        }
        self.out
    }

    fn cross_edge(&self, p: Point, q: Point, apex: Point) -> Option<Point> {
        if !self.cfg.opposite_side {
            return find_third_vertex(self.points, p, q, Some(apex), self.cfg);
        }
        find_third_vertex_where(self.points, p, q, Some(apex), self.cfg, |c| {
            Triangle::new(p, q, c).is_some_and(|t| self.fits(&t))
        })
    }

    /// No edge side already taken and no crossing with an existing edge.
    fn fits(&self, t: &Triangle) -> bool {
        let sides_free = t.edges().iter().all(|&(u, v, w)| {
            let key = edge_key(u, v);
            !self
                .occupied
                .contains(&(key, Orientation::of(key.0, key.1, w)))
        });
        sides_free
            && t.edges().iter().all(|&(u, v, _)| {
                !self
                    .edges
                    .iter()
                    .any(|&(x, y)| segments_cross(u, v, x, y))
            })
    }

    fn enqueue(&mut self, t: Triangle) {
        if !self.seen.insert(t) {
            return;
        }
        if self.cfg.opposite_side {
            for (u, v, w) in t.edges() {
                let key = edge_key(u, v);
                let fresh = !self.occupied.contains(&(key, Orientation::Clockwise))
                    && !self.occupied.contains(&(key, Orientation::CounterClockwise));
                if fresh {
                    self.edges.push(key);
                }
                self.occupied
                    .insert((key, Orientation::of(key.0, key.1, w)));
            }
        }
        self.queue.push_back(t);
    }
}
