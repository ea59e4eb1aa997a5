//! Orientation predicate for ordered point triples.
//!
//! Sign convention
//! - The predicate classifies by the sign of `cross(b - a, c - a)`:
//!   positive is `Clockwise`, zero is `Straight`, negative is `CounterClockwise`.
//! - With screen coordinates (y grows downward) this matches what the eye sees.
//!   In the usual y-up frame the names are mirrored. The hull and mesh code are
//!   written against this convention; do not flip the sign in one place only.
//! - `Straight` is exact (`== 0.0`). No tolerance is applied, so near-collinear
//!   triples may classify either way under rounding.

use super::types::Point;

/// Turn direction of an ordered triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Straight,
    CounterClockwise,
}

impl Orientation {
    /// Classify the turn `a → b → c`.
    ///
    /// A NaN cross product falls through to `CounterClockwise`; callers feed
    /// finite coordinates.
    #[inline]
    pub fn of(a: Point, b: Point, c: Point) -> Self {
        let k = (b - a).cross(c - a);
        if k > 0.0 {
            Orientation::Clockwise
        } else if k == 0.0 {
            Orientation::Straight
        } else {
            Orientation::CounterClockwise
        }
    }

    #[inline]
    pub fn is_ccw(self) -> bool {
        matches!(self, Orientation::CounterClockwise)
    }

    /// Orientation of the same triple traversed backwards.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Straight => Orientation::Straight,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/// Shorthand for [`Orientation::of`].
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    Orientation::of(a, b, c)
}

/// Segments `ab` and `cd` cross at a single interior point of both.
///
/// Touching at an endpoint, or any collinear contact, does not count.
pub fn segments_cross(a: Point, b: Point, c: Point, d: Point) -> bool {
    let (c_side, d_side) = (Orientation::of(a, b, c), Orientation::of(a, b, d));
    let (a_side, b_side) = (Orientation::of(c, d, a), Orientation::of(c, d, b));
    [c_side, d_side, a_side, b_side]
        .iter()
        .all(|&o| o != Orientation::Straight)
        && c_side != d_side
        && a_side != b_side
}
