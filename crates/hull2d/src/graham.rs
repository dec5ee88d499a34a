//! Graham scan.
//!
//! Model
//! - Anchor: lowest y, then lowest x. It is always a hull vertex.
//! - Remaining points are merge-sorted by the polar angle of `anchor → p`
//!   (in `[0, π)` since nothing lies below the anchor). Points on a shared
//!   ray from the anchor go nearer-first.
//! - A `Vec` acts as the stack; after each push, the second-from-top entry
//!   is removed while the top three fail to make a strict left turn.
//!
//! Output is counter-clockwise from the anchor. Collinear boundary points are
//! dropped, unlike gift wrap.

use std::cmp::Ordering;

use crate::cfg::{HullCfg, MIN_POINTS};
use crate::error::HullError;
use crate::log::{EventSink, HullEvent};
use crate::orient::{orient, orient_eps, Turn};
use crate::sort::merge_sort_by;
use crate::Point;

/// A point paired with its angle and squared distance from the anchor.
/// Lives only for the angular sort.
#[derive(Clone, Copy, Debug)]
struct Polar {
    point: Point,
    angle: f64,
    dist2: f64,
}

impl Polar {
    fn around(anchor: Point, point: Point) -> Self {
        let d = point - anchor;
        Self {
            point,
            angle: d.y.atan2(d.x),
            dist2: d.norm_squared(),
        }
    }
}

/// Counter-clockwise hull starting at the anchor.
///
/// Errors
/// - `InsufficientPoints` for fewer than 3 points.
/// - `DegenerateHull` if fewer than 3 vertices survive (collinear input).
pub fn graham_scan(
    points: &[Point],
    cfg: &HullCfg,
    sink: &mut dyn EventSink,
) -> Result<Vec<Point>, HullError> {
    let n = points.len();
    if n < MIN_POINTS {
        return Err(HullError::InsufficientPoints {
            got: n,
            need: MIN_POINTS,
        });
    }

    let anchor = lowest_point(points);
    sink.record(HullEvent::Start { point: anchor });

    let polar: Vec<Polar> = points
        .iter()
        .filter(|&&p| p != anchor)
        .map(|&p| Polar::around(anchor, p))
        .collect();
    let sorted = merge_sort_by(&polar, |a, b| by_angle(anchor, a, b));
    sink.record(HullEvent::AngleSorted { len: sorted.len() });

    let mut hull: Vec<Point> = Vec::with_capacity(sorted.len() + 1);
    hull.push(anchor);
    for Polar { point, .. } in sorted {
        hull.push(point);
        sink.record(HullEvent::Accepted { point });
        while hull.len() >= 3 {
            let l = hull.len();
            if orient_eps(hull[l - 3], hull[l - 2], hull[l - 1], cfg.eps) == Turn::Left {
                break;
            }
            let popped = hull.remove(l - 2);
            sink.record(HullEvent::Popped { point: popped });
        }
    }

    if hull.len() < MIN_POINTS {
        return Err(HullError::degenerate("all points are collinear"));
    }
    sink.record(HullEvent::Closed {
        vertices: hull.len(),
    });
    Ok(hull)
}

/// Lowest y, ties by lowest x; first occurrence wins exact ties.
fn lowest_point(points: &[Point]) -> Point {
    let mut p0 = points[0];
    for &p in &points[1..] {
        if p.y < p0.y || (p.y == p0.y && p.x < p0.x) {
            p0 = p;
        }
    }
    p0
}

/// Angle ascending; points on the same ray from the anchor nearer-first.
///
/// Shared rays use the exact turn test so the order stays transitive under
/// any `eps`.
fn by_angle(anchor: Point, a: &Polar, b: &Polar) -> Ordering {
    let same_ray = orient(anchor, a.point, b.point) == Turn::Collinear
        && (a.point - anchor).dot(&(b.point - anchor)) > 0.0;
    let (ka, kb) = if same_ray {
        (a.dist2, b.dist2)
    } else {
        (a.angle, b.angle)
    };
    ka.partial_cmp(&kb).unwrap_or(Ordering::Equal)
}
