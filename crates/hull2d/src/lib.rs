//! 2D convex hulls: gift wrapping (Jarvis march) and Graham scan.
//!
//! Layout
//! - `orient`: the turn test every hull decision goes through.
//! - `sort`: stable merge sort (by axis, or by any comparator).
//! - `gift_wrap`, `graham`: the two hull algorithms.
//! - `hull`: `Algorithm`, `Hull`, and the `compute_hull` dispatch.
//! - `point_set`: append-only input collection.
//! - `log`: diagnostic sink injected by the caller (no global debug flag).
//! - `sample`: seeded random point sets and fixed fixtures.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; equality is exact.
//! - Gift wrap returns clockwise hulls, Graham scan counter-clockwise ones.
//!   `Hull::winding` records which.

pub mod cfg;
pub mod error;
pub mod gift_wrap;
pub mod graham;
pub mod hull;
pub mod log;
pub mod orient;
pub mod point_set;
pub mod sample;
pub mod sort;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A point in the plane.
pub type Point = nalgebra::Vector2<f64>;

pub use cfg::{HullCfg, MIN_POINTS};
pub use error::HullError;
pub use gift_wrap::gift_wrap;
pub use graham::graham_scan;
pub use hull::{compute_hull, compute_hull_with, Algorithm, Hull, Winding};
pub use log::{EventSink, HullEvent, NullSink, TracingSink};
pub use orient::{orient, orient_eps, signed_area2, Turn};
pub use point_set::PointSet;
pub use sort::{merge_sort_by, sort_by_axis, Axis};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{compute_hull, compute_hull_with, Algorithm, Hull, Winding};
    pub use crate::log::{EventSink, HullEvent, NullSink, TracingSink};
    pub use crate::point_set::PointSet;
    pub use crate::{HullCfg, HullError, Point};
    pub use nalgebra::Vector2 as Vec2;
}

#[cfg(test)]
mod tests;
