//! Planar primitives: positions (`Point`) and displacements (`Vector`).
//!
//! - `Point - Point` yields a `Vector`; positions are never summed directly.
//! - `Point` equality is exact coordinate equality. `-0.0` and `0.0` compare
//!   equal and hash alike, so points can key hash sets.
//!
//! Code cross-refs: `orient::Orientation`, `matrix::Matrix`

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::{Point2, Vector2};

/// Fold `-0.0` into `0.0` so equality, hashing and ordering agree.
#[inline]
fn canonical(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// Position in the plane.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Position vector (displacement from the origin).
    #[inline]
    pub fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }

    /// Height on the lifting paraboloid `z = x² + y²`.
    #[inline]
    pub fn lifted(self) -> f64 {
        self.to_vector().norm2()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Total order by x, then y.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        canonical(self.x)
            .total_cmp(&canonical(other.x))
            .then_with(|| canonical(self.y).total_cmp(&canonical(other.y)))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        canonical(self.x).to_bits() == canonical(other.x).to_bits()
            && canonical(self.y).to_bits() == canonical(other.y).to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(canonical(self.x).to_bits());
        state.write_u64(canonical(self.y).to_bits());
    }
}

impl Sub for Point {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<Point2<f64>> for Point {
    fn from(p: Point2<f64>) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for Point2<f64> {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Direction or displacement in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    /// Reference direction of the polar-angle sort.
    pub const X: Vector = Vector::new(1.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product.
    #[inline]
    pub fn cross(self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn norm2(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector with the same direction; `None` for zero or non-finite length.
    #[inline]
    pub fn normalize(self) -> Option<Vector> {
        let n = self.norm();
        if !n.is_finite() || n <= 0.0 {
            return None;
        }
        Some(self / n)
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, k: f64) -> Vector {
        Vector::new(self.x * k, self.y * k)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn div(self, k: f64) -> Vector {
        Vector::new(self.x / k, self.y / k)
    }
}

impl From<Vector2<f64>> for Vector {
    fn from(v: Vector2<f64>) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl From<Vector> for Vector2<f64> {
    fn from(v: Vector) -> Self {
        Vector2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn signed_zero_points_are_one_key() {
        let a = Point::new(0.0, -0.0);
        let b = Point::new(-0.0, 0.0);
        assert_eq!(a, b);
        let set: HashSet<Point> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_eq!(a.total_cmp(&b), Ordering::Equal);
    }

    #[test]
    fn point_difference_is_a_vector() {
        let v = Point::new(3.0, 5.0) - Point::new(1.0, 1.0);
        assert_eq!(v, Vector::new(2.0, 4.0));
        assert_eq!(Point::new(1.0, 1.0) + v, Point::new(3.0, 5.0));
        assert_eq!(Point::new(3.0, 5.0) - v, Point::new(1.0, 1.0));
    }

    #[test]
    fn products_and_norms() {
        let a = Vector::new(3.0, 4.0);
        let b = Vector::new(-4.0, 3.0);
        assert_eq!(a.dot(b), 0.0);
        assert_eq!(a.cross(b), 25.0);
        assert_eq!(a.norm2(), 25.0);
        assert!((a.norm() - 5.0).abs() < 1e-12);
        let u = a.normalize().unwrap();
        assert!((u.norm() - 1.0).abs() < 1e-12);
        assert!(Vector::default().normalize().is_none());
    }

    #[test]
    fn nalgebra_round_trip_keeps_kinds() {
        let p: Point2<f64> = Point::new(1.5, -2.0).into();
        assert_eq!(Point::from(p), Point::new(1.5, -2.0));
        let v: Vector2<f64> = Vector::new(0.5, 0.25).into();
        assert_eq!(Vector::from(v), Vector::new(0.5, 0.25));
    }
}
