//! Algorithm selection and the `Hull` result type.

use std::fmt;
use std::str::FromStr;

use crate::cfg::HullCfg;
use crate::error::HullError;
use crate::gift_wrap::gift_wrap;
use crate::graham::graham_scan;
use crate::log::{EventSink, NullSink};
use crate::point_set::PointSet;
use crate::Point;

/// Hull construction algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    GiftWrap,
    GrahamScan,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::GiftWrap, Algorithm::GrahamScan];

    /// Rotational order this algorithm produces.
    #[inline]
    pub fn winding(self) -> Winding {
        match self {
            Algorithm::GiftWrap => Winding::Clockwise,
            Algorithm::GrahamScan => Winding::CounterClockwise,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::GiftWrap => "gift-wrap",
            Algorithm::GrahamScan => "graham-scan",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gift-wrap" | "gift_wrap" | "jarvis" => Ok(Algorithm::GiftWrap),
            "graham-scan" | "graham_scan" | "graham" => Ok(Algorithm::GrahamScan),
            other => Err(format!("unknown hull algorithm: {other}")),
        }
    }
}

/// Rotational order of hull vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    pub fn name(self) -> &'static str {
        match self {
            Winding::Clockwise => "clockwise",
            Winding::CounterClockwise => "counter-clockwise",
        }
    }
}

/// Ordered hull boundary, rebuilt from scratch by every computation.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    pub vertices: Vec<Point>,
    pub algorithm: Algorithm,
}

impl Hull {
    #[inline]
    pub fn winding(&self) -> Winding {
        self.algorithm.winding()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.vertices.iter()
    }

    /// Coordinate pairs in hull order, for presentation.
    pub fn coords(&self) -> Vec<[f64; 2]> {
        self.vertices.iter().map(|p| [p.x, p.y]).collect()
    }

    /// Shoelace area; positive for counter-clockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let p0 = self.vertices[0];
        let mut acc = 0.0;
        for k in 1..n - 1 {
            let a = self.vertices[k] - p0;
            let b = self.vertices[k + 1] - p0;
            acc += a.x * b.y - a.y * b.x;
        }
        0.5 * acc
    }
}

/// Compute the hull of `set` with default tolerances and no diagnostics.
pub fn compute_hull(set: &PointSet, algorithm: Algorithm) -> Result<Hull, HullError> {
    compute_hull_with(set, algorithm, &HullCfg::default(), &mut NullSink)
}

/// Compute the hull of `set`, reporting steps to `sink`.
pub fn compute_hull_with(
    set: &PointSet,
    algorithm: Algorithm,
    cfg: &HullCfg,
    sink: &mut dyn EventSink,
) -> Result<Hull, HullError> {
    let vertices = match algorithm {
        Algorithm::GiftWrap => gift_wrap(set.as_slice(), cfg, sink)?,
        Algorithm::GrahamScan => graham_scan(set.as_slice(), cfg, sink)?,
    };
    Ok(Hull {
        vertices,
        algorithm,
    })
}
