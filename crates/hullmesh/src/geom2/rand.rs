//! Random planar point sets (uniform box, circle, lattice) with replay tokens.
//!
//! Purpose
//! - Deterministic inputs for benches, property tests, and the `sample` CLI
//!   command. Layouts cover the degenerate cases the engine must survive:
//!   near-cocircular rings and lattices full of collinear and cocircular quads.
//!
//! Model
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the k-th draw of a stream can be regenerated without replaying 0..k.

use super::types::Point;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Where sampled points are placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointLayout {
    /// Uniform in the square `[-half_width, half_width]²`.
    Uniform { half_width: f64 },
    /// On the circle of the given radius around the origin, random angles.
    Circle { radius: f64 },
    /// Lattice `cols × rows` with the given spacing, in shuffled order.
    Grid {
        cols: usize,
        rows: usize,
        spacing: f64,
    },
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PointCloudCfg {
    /// Number of points; lattice layouts are truncated to it.
    pub count: usize,
    pub layout: PointLayout,
    /// Round coordinates to integers (keeps predicate arithmetic exact).
    pub integer_coords: bool,
}

impl Default for PointCloudCfg {
    fn default() -> Self {
        Self {
            count: 32,
            layout: PointLayout::Uniform { half_width: 100.0 },
            integer_coords: false,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next draw of the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw a point set. Non-finite or negative extents collapse to the origin.
pub fn draw_points(cfg: PointCloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let mut pts: Vec<Point> = match cfg.layout {
        PointLayout::Uniform { half_width } => {
            let hw = sanitize_extent(half_width);
            (0..cfg.count)
                .map(|_| Point::new(rng.gen_range(-hw..=hw), rng.gen_range(-hw..=hw)))
                .collect()
        }
        PointLayout::Circle { radius } => {
            let r = sanitize_extent(radius);
            (0..cfg.count)
                .map(|_| {
                    let th = rng.gen::<f64>() * std::f64::consts::TAU;
                    Point::new(r * th.cos(), r * th.sin())
                })
                .collect()
        }
        PointLayout::Grid {
            cols,
            rows,
            spacing,
        } => {
            let s = sanitize_extent(spacing);
            let mut lattice: Vec<Point> = (0..rows)
                .flat_map(|j| (0..cols).map(move |i| Point::new(i as f64 * s, j as f64 * s)))
                .collect();
            lattice.shuffle(&mut rng);
            lattice.truncate(cfg.count);
            lattice
        }
    };
    if cfg.integer_coords {
        for p in &mut pts {
            p.x = p.x.round();
            p.y = p.y.round();
        }
    }
    pts
}

#[inline]
fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_token_same_points() {
        let cfg = PointCloudCfg::default();
        let tok = ReplayToken { seed: 7, index: 3 };
        assert_eq!(draw_points(cfg, tok), draw_points(cfg, tok));
        assert_ne!(draw_points(cfg, tok), draw_points(cfg, tok.next()));
    }

    #[test]
    fn uniform_points_stay_in_box() {
        let cfg = PointCloudCfg {
            count: 200,
            layout: PointLayout::Uniform { half_width: 5.0 },
            integer_coords: true,
        };
        let pts = draw_points(cfg, ReplayToken { seed: 1, index: 0 });
        assert_eq!(pts.len(), 200);
        for p in pts {
            assert!(p.x.abs() <= 5.0 && p.y.abs() <= 5.0);
            assert_eq!(p.x, p.x.round());
        }
    }

    #[test]
    fn circle_points_are_near_cocircular() {
        let cfg = PointCloudCfg {
            count: 16,
            layout: PointLayout::Circle { radius: 3.0 },
            integer_coords: false,
        };
        for p in draw_points(cfg, ReplayToken { seed: 2, index: 0 }) {
            assert!((p.to_vector().norm() - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn grid_is_truncated_and_distinct() {
        let cfg = PointCloudCfg {
            count: 10,
            layout: PointLayout::Grid {
                cols: 4,
                rows: 4,
                spacing: 2.0,
            },
            integer_coords: false,
        };
        let pts = draw_points(cfg, ReplayToken { seed: 3, index: 9 });
        assert_eq!(pts.len(), 10);
        let unique: std::collections::HashSet<Point> = pts.iter().copied().collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn degenerate_extent_collapses() {
        let cfg = PointCloudCfg {
            count: 3,
            layout: PointLayout::Uniform {
                half_width: f64::NAN,
            },
            integer_coords: false,
        };
        let pts = draw_points(cfg, ReplayToken { seed: 0, index: 0 });
        assert!(pts.iter().all(|p| *p == Point::new(0.0, 0.0)));
    }
}
