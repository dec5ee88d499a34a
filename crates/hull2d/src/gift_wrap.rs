//! Gift wrapping (Jarvis march).
//!
//! Model
//! - Sort by x (stable merge sort) only to fix a reproducible start: the
//!   first lowest-x point.
//! - From the current vertex, a candidate `j` is an edge endpoint if no other
//!   point lies strictly left of `current → j`. This walks the hull clockwise.
//! - Of the passing candidates the exact leftmost direction is taken, so a
//!   positive `eps` cannot pull the walk onto points just inside an edge.
//! - Exactly collinear boundary points tie; the nearest one wins, so every
//!   point on a hull edge is listed, in order along the edge.
//!
//! Complexity: O(n²) per step, O(n²h) overall for `h` hull vertices.

use crate::cfg::{HullCfg, MIN_POINTS};
use crate::error::HullError;
use crate::log::{EventSink, HullEvent};
use crate::orient::{orient_eps, signed_area2, Turn};
use crate::sort::{sort_by_axis, Axis};
use crate::Point;

/// Clockwise hull starting at the lowest-x point; the start is not repeated.
///
/// Errors
/// - `InsufficientPoints` for fewer than 3 points.
/// - `DegenerateHull` if all points are collinear, or the wrap cannot close
///   within `n` steps.
pub fn gift_wrap(
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
    if all_collinear(points, cfg.eps) {
        return Err(HullError::degenerate("all points are collinear"));
    }

    let pts = sort_by_axis(points, Axis::X);
    sink.record(HullEvent::Sorted {
        axis: Axis::X,
        len: n,
    });

    let start = pts[0];
    sink.record(HullEvent::Start { point: start });
    let mut hull = vec![start];
    let mut cur = 0;
    // A hull has at most n vertices, so n steps always suffice to close it.
    for _ in 0..n {
        let next = next_vertex(&pts, cur, cfg.eps).ok_or_else(|| {
            HullError::degenerate(format!(
                "no hull edge leaves ({}, {})",
                pts[cur].x, pts[cur].y
            ))
        })?;
        if next == 0 || pts[next] == start {
            sink.record(HullEvent::Closed {
                vertices: hull.len(),
            });
            return Ok(hull);
        }
        hull.push(pts[next]);
        sink.record(HullEvent::Accepted { point: pts[next] });
        cur = next;
    }
    Err(HullError::degenerate(format!(
        "wrap did not close within {n} steps"
    )))
}

/// Index of the next vertex clockwise from `pts[cur]`.
///
/// Candidates pass if no point lies more than `eps` left of `pts[cur] → pts[j]`.
/// Among those, the exact leftmost direction wins; exactly collinear ties on
/// the same ray go to the nearer point, then the lowest index.
fn next_vertex(pts: &[Point], cur: usize, eps: f64) -> Option<usize> {
    let origin = pts[cur];
    let mut best: Option<usize> = None;
    for (j, &cand) in pts.iter().enumerate() {
        if j == cur || cand == origin {
            continue;
        }
        let violated = pts
            .iter()
            .enumerate()
            .any(|(k, &q)| k != cur && k != j && orient_eps(origin, cand, q, eps) == Turn::Left);
        if violated {
            continue;
        }
        let better = match best {
            None => true,
            Some(b) => {
                let (db, dc) = (pts[b] - origin, cand - origin);
                let cross = signed_area2(origin, pts[b], cand);
                cross > 0.0
                    || (cross == 0.0 && db.dot(&dc) > 0.0 && dc.norm_squared() < db.norm_squared())
            }
        };
        if better {
            best = Some(j);
        }
    }
    best
}

/// True if every point lies on one line (including the all-coincident case).
pub(crate) fn all_collinear(points: &[Point], eps: f64) -> bool {
    let Some(&a) = points.first() else {
        return true;
    };
    let Some(&b) = points.iter().find(|&&p| p != a) else {
        return true;
    };
    points
        .iter()
        .all(|&p| orient_eps(a, b, p, eps) == Turn::Collinear)
}
