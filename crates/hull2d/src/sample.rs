//! Point set sources: seeded random draws and fixed fixtures.
//!
//! Determinism
//! - Random draws take a `(seed, index)` replay token mixed into one
//!   `StdRng`, so any draw in a stream can be regenerated on its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point_set::PointSet;
use crate::Point;

/// Inclusive integer box for random coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    pub min: i64,
    pub max: i64,
}

impl Default for GridBounds {
    fn default() -> Self {
        Self { min: 0, max: 100 }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
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
}

/// `count` points with integer coordinates drawn uniformly from `bounds`².
///
/// Duplicates are possible and kept.
pub fn random_grid_points(count: usize, bounds: GridBounds, tok: ReplayToken) -> PointSet {
    let mut rng = tok.to_std_rng();
    let lo = bounds.min.min(bounds.max);
    let hi = bounds.max.max(bounds.min);
    (0..count)
        .map(|_| {
            let x = rng.gen_range(lo..=hi) as f64;
            let y = rng.gen_range(lo..=hi) as f64;
            Point::new(x, y)
        })
        .collect()
}

/// `count` points uniformly in the disk of radius `radius` around the origin.
pub fn random_disk_points(count: usize, radius: f64, tok: ReplayToken) -> PointSet {
    let mut rng = tok.to_std_rng();
    let r0 = radius.abs();
    (0..count)
        .map(|_| {
            let theta = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = r0 * rng.gen::<f64>().sqrt();
            Point::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}

/// `count` equally spaced points on a circle, counter-clockwise from `phase`.
pub fn circle_points(count: usize, radius: f64, phase: f64) -> PointSet {
    let delta = std::f64::consts::TAU / (count.max(1) as f64);
    (0..count)
        .map(|k| {
            let t = phase + (k as f64) * delta;
            Point::new(radius * t.cos(), radius * t.sin())
        })
        .collect()
}

/// Nine-point worked example; its hull is
/// `(10, 1), (11, 10), (5, 12.4), (3, 11), (2, 5)`.
pub fn worked_example() -> PointSet {
    let mut set = PointSet::new();
    set.add_point(2.0, 5.0);
    set.add_point(6.7, 6.0);
    set.add_point(7.0, 5.4);
    set.add_point(11.0, 10.0);
    set.add_point(3.0, 11.0);
    set.add_point(10.0, 1.0);
    set.add_point(5.0, 12.4);
    set.add_point(10.0, 7.0);
    set.add_point(5.0, 8.0);
    set
}
