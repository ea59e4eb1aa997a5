//! Empty-circumcircle predicate and third-vertex search.
//!
//! Lifted determinant
//! - Rows `[x, y, x² + y², 1]` for `a, b, c, p`. Zero exactly when `p` lies on
//!   the circle through `a, b, c`; the sign says inside or outside, relative to
//!   the winding of `a, b, c`.
//! - `incircle` folds the winding in: its value is positive outside, zero on
//!   the circle and negative inside, whatever the order of `a, b, c`.

use crate::geom2::{Matrix, Orientation, Point};

use super::types::MeshCfg;

/// Raw 4×4 lifted determinant for `(a, b, c, p)`.
pub fn lifted_determinant(a: Point, b: Point, c: Point, p: Point) -> f64 {
    let row = |q: Point| [q.x, q.y, q.lifted(), 1.0];
    // Always square; NaN would reject every candidate if that ever changed.
    Matrix::from_rows(&[row(a), row(b), row(c), row(p)])
        .determinant()
        .unwrap_or(f64::NAN)
}

/// Orientation-adjusted incircle value: `> 0` outside, `0` on, `< 0` inside.
///
/// Meaningless for collinear `a, b, c`.
pub fn incircle(a: Point, b: Point, c: Point, p: Point) -> f64 {
    let det = lifted_determinant(a, b, c, p);
    if Orientation::of(a, b, c).is_ccw() {
        det
    } else {
        -det
    }
}

/// True iff `a, b, c` form a proper triangle whose circumcircle holds no other
/// point of `points` (on-circle handling per `cfg.boundary`).
///
/// Occurrences of `a`, `b` or `c` in `points` are skipped, duplicates included.
pub fn is_valid_triangle(points: &[Point], a: Point, b: Point, c: Point, cfg: MeshCfg) -> bool {
    if a == b || b == c || a == c {
        return false;
    }
    let turn = Orientation::of(a, b, c);
    if turn == Orientation::Straight {
        return false;
    }
    let flip = !turn.is_ccw();
    points
        .iter()
        .copied()
        .filter(|&p| p != a && p != b && p != c)
        .all(|p| {
            let det = lifted_determinant(a, b, c, p);
            cfg.boundary.admits(if flip { -det } else { det })
        })
}

/// First `c` in input order such that `(a, b, c)` is valid.
///
/// With `exclude = Some(apex)` the apex itself is skipped, and when
/// `cfg.opposite_side` is set so is every point on the apex's side of `ab`.
pub fn find_third_vertex(
    points: &[Point],
    a: Point,
    b: Point,
    exclude: Option<Point>,
    cfg: MeshCfg,
) -> Option<Point> {
    find_third_vertex_where(points, a, b, exclude, cfg, |_| true)
}

/// [`find_third_vertex`] that also skips valid candidates rejected by `accept`.
pub fn find_third_vertex_where<F>(
    points: &[Point],
    a: Point,
    b: Point,
    exclude: Option<Point>,
    cfg: MeshCfg,
    mut accept: F,
) -> Option<Point>
where
    F: FnMut(Point) -> bool,
{
    let apex_side = exclude.map(|apex| Orientation::of(a, b, apex));
    points.iter().copied().find(|&p| {
        if let (Some(apex), Some(side)) = (exclude, apex_side) {
            if p == apex {
                return false;
            }
            if cfg.opposite_side && Orientation::of(a, b, p) == side {
                return false;
            }
        }
        is_valid_triangle(points, a, b, p, cfg) && accept(p)
    })
}
