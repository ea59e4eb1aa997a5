//! Data types for triangles, triangulations and the mesh configuration.

use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

use crate::geom2::{Orientation, Point};

/// How the empty-circumcircle test treats points exactly on the circle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CircleBoundary {
    /// On-circle points are admitted (incircle value `>= 0`).
    #[default]
    Inclusive,
    /// Only strictly-outside points are admitted (incircle value `> 0`).
    Exclusive,
}

impl CircleBoundary {
    /// Whether an orientation-adjusted incircle value passes.
    #[inline]
    pub fn admits(self, value: f64) -> bool {
        match self {
            CircleBoundary::Inclusive => value >= 0.0,
            CircleBoundary::Exclusive => value > 0.0,
        }
    }
}

/// Mesh configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshCfg {
    pub boundary: CircleBoundary,
    /// When crossing an edge, only accept candidates on the far side of the
    /// edge from the triangle we came from, and keep the mesh planar (no edge
    /// side used twice, no crossing edges). Off: plain first-match expansion,
    /// which can overlap on cocircular input.
    pub opposite_side: bool,
}

impl Default for MeshCfg {
    fn default() -> Self {
        Self {
            boundary: CircleBoundary::Inclusive,
            opposite_side: true,
        }
    }
}

/// Three distinct, non-collinear vertices. Equality and hashing ignore vertex order.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    a: Point,
    b: Point,
    c: Point,
}

impl Triangle {
    /// `None` for coincident or collinear vertices.
    pub fn new(a: Point, b: Point, c: Point) -> Option<Self> {
        if a == b || b == c || a == c {
            return None;
        }
        if Orientation::of(a, b, c) == Orientation::Straight {
            return None;
        }
        Some(Self { a, b, c })
    }

    #[inline]
    pub fn a(&self) -> Point {
        self.a
    }
    #[inline]
    pub fn b(&self) -> Point {
        self.b
    }
    #[inline]
    pub fn c(&self) -> Point {
        self.c
    }

    /// Vertices in construction order.
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// `(p, q, apex)` per edge, in crossing order: `bc`, `ac`, `ab`.
    pub fn edges(&self) -> [(Point, Point, Point); 3] {
        [
            (self.b, self.c, self.a),
            (self.a, self.c, self.b),
            (self.a, self.b, self.c),
        ]
    }

    pub fn contains_vertex(&self, p: Point) -> bool {
        self.a == p || self.b == p || self.c == p
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.a, self.b, self.c)
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        0.5 * (self.b - self.a).cross(self.c - self.a).abs()
    }

    fn sorted_vertices(&self) -> [Point; 3] {
        let mut v = self.vertices();
        v.sort_by(Point::total_cmp);
        v
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_vertices() == other.sorted_vertices()
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_vertices().hash(state);
    }
}

/// Set of triangles that keeps the order in which they were accepted.
#[derive(Clone, Debug, Default)]
pub struct Triangulation {
    triangles: Vec<Triangle>,
    members: HashSet<Triangle>,
}

impl Triangulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless already present; returns whether it was new.
    pub(crate) fn insert(&mut self, t: Triangle) -> bool {
        if self.members.insert(t) {
            self.triangles.push(t);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn contains(&self, t: &Triangle) -> bool {
        self.members.contains(t)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Triangles in acceptance order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Sum of triangle areas.
    pub fn area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Distinct undirected edges, first-seen order, endpoints sorted.
    pub fn edges(&self) -> Vec<(Point, Point)> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for t in &self.triangles {
            for (p, q, _) in t.edges() {
                let key = if p.total_cmp(&q).is_le() { (p, q) } else { (q, p) };
                if seen.insert(key) {
                    out.push(key);
                }
            }
        }
        out
    }

    /// Vertex indices into `points` (first occurrence wins); `None` if a
    /// vertex does not occur in `points`.
    pub fn to_indices(&self, points: &[Point]) -> Option<Vec<[usize; 3]>> {
        let mut index: HashMap<Point, usize> = HashMap::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            index.entry(*p).or_insert(i);
        }
        self.triangles
            .iter()
            .map(|t| {
                Some([
                    *index.get(&t.a)?,
                    *index.get(&t.b)?,
                    *index.get(&t.c)?,
                ])
            })
            .collect()
    }
}

impl PartialEq for Triangulation {
    /// Set equality; acceptance order is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl<'a> IntoIterator for &'a Triangulation {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
