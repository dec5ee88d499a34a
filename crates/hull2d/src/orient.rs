//! Orientation primitive: the single source of truth for turn decisions.

use crate::Point;

/// Turn direction of three ordered points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
    Collinear,
}

/// Twice the signed area of the triangle `(a, b, c)`.
///
/// Differences are formed relative to `a` before multiplying, which keeps
/// precision for nearby points far from the origin.
#[inline]
pub fn signed_area2(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ac.x * ab.y
}

/// Classify `a → b → c` with exact zero comparison.
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> Turn {
    orient_eps(a, b, c, 0.0)
}

/// Classify `a → b → c`; `|cross| <= eps` is collinear.
///
/// NaN coordinates classify as `Collinear`.
#[inline]
pub fn orient_eps(a: Point, b: Point, c: Point, eps: f64) -> Turn {
    let cross = signed_area2(a, b, c);
    if cross > eps {
        Turn::Left
    } else if cross < -eps {
        Turn::Right
    } else {
        Turn::Collinear
    }
}
