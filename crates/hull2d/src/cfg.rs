//! Tolerances and limits for the hull algorithms.
//!
//! Policy
//! - Defaults reproduce exact floating-point comparisons. A non-zero `eps`
//!   is an opt-in deviation for callers with noisy input.

/// Fewest points a hull algorithm accepts.
pub const MIN_POINTS: usize = 3;

/// Hull configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Cross products with `|cross| <= eps` count as collinear.
    ///
    /// Gift wrap uses it for the collinear-input check and to widen its
    /// candidate filter; edge selection stays exact. Graham scan pops
    /// near-collinear middle points.
    pub eps: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self { eps: 0.0 }
    }
}

impl HullCfg {
    /// Config with a collinearity tolerance. Negative values are clamped to 0.
    #[inline]
    pub fn with_eps(eps: f64) -> Self {
        Self { eps: eps.max(0.0) }
    }
}
