//! Convex hull of a planar point list (Graham scan).
//!
//! Algorithm
//! - Anchor `p0`: minimum y, ties broken by minimum x.
//! - Remaining points sorted by polar angle around `p0`, ascending in the
//!   orientation predicate's counter-clockwise sense. Equivalently: ascending
//!   dot product of the normalized direction `(p - p0)/|p - p0|` with `(1, 0)`.
//!   Points on one ray from the anchor are ordered nearest first.
//! - Stack scan: pop while the last two hull points and the candidate do not
//!   make a `CounterClockwise` turn, then push the candidate.
//!
//! Output
//! - Hull vertices in scan order, anchor first, one consistent winding.
//! - Collinear boundary points are dropped; a collinear input collapses to its
//!   two extreme points. Copies of the anchor are dropped, other duplicates
//!   collapse during the scan.
//! - Fewer than two input points are returned unchanged.
//!
//! Code cross-refs: `geom2::Orientation`, `mesh::triangulate`

use std::cmp::Ordering;

use crate::geom2::{Orientation, Point, Vector};

/// Lowest point (minimum y, then minimum x); `None` when empty.
pub fn polar_anchor(points: &[Point]) -> Option<Point> {
    points.iter().copied().min_by(|a, b| {
        a.y.total_cmp(&b.y)
            .then_with(|| a.x.total_cmp(&b.x))
            .then_with(|| a.total_cmp(b))
    })
}

/// Anchor followed by every other point in ascending polar angle around it.
///
/// Lists with fewer than two points are returned unchanged.
pub fn sort_by_polar_angle(points: &[Point]) -> Vec<Point> {
    let anchor = match polar_anchor(points) {
        Some(p0) if points.len() >= 2 => p0,
        _ => return points.to_vec(),
    };
    let mut keyed: Vec<(f64, f64, Point)> = points
        .iter()
        .copied()
        .filter(|p| *p != anchor)
        .map(|p| {
            let d = p - anchor;
            let key = d.normalize().map_or(f64::NAN, |u| u.dot(Vector::X));
            (key, d.norm2(), p)
        })
        .collect();
    keyed.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then_with(|| a.1.total_cmp(&b.1))
            .then_with(|| a.2.total_cmp(&b.2))
    });

    let mut sorted = Vec::with_capacity(keyed.len() + 1);
    sorted.push(anchor);
    sorted.extend(keyed.into_iter().map(|(_, _, p)| p));
    order_rays_nearest_first(&mut sorted[1..], anchor);
    sorted
}

/// Rounding can give points on one ray slightly different angle keys; regroup
/// every run that is exactly collinear with the anchor by distance.
fn order_rays_nearest_first(tail: &mut [Point], anchor: Point) {
    let mut start = 0;
    while start < tail.len() {
        let head = tail[start];
        let mut end = start + 1;
        while end < tail.len() && Orientation::of(anchor, head, tail[end]) == Orientation::Straight
        {
            end += 1;
        }
        if end - start > 1 {
            tail[start..end].sort_by(|a, b| by_distance(anchor, a, b));
        }
        start = end;
    }
}

#[inline]
fn by_distance(anchor: Point, a: &Point, b: &Point) -> Ordering {
    (*a - anchor)
        .norm2()
        .total_cmp(&(*b - anchor).norm2())
        .then_with(|| a.total_cmp(b))
}

/// Convex hull polygon of `points`, see the module docs for ordering rules.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let sorted = sort_by_polar_angle(points);
    let mut hull: Vec<Point> = Vec::with_capacity(sorted.len());
    hull.extend(sorted.iter().take(2));
    for &p in sorted.iter().skip(2) {
        while hull.len() >= 2 {
            let n = hull.len();
            if Orientation::of(hull[n - 2], hull[n - 1], p).is_ccw() {
                break;
            }
            hull.pop();
        }
        hull.push(p);
    }
    hull
}
