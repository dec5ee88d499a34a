use std::fmt;

/// Errors surfaced by the hull algorithms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Fewer points than the algorithm's geometric minimum. Recoverable by
    /// supplying more points.
    InsufficientPoints { got: usize, need: usize },
    /// The points do not span a polygon (all collinear or coincident), or the
    /// wrap could not be closed.
    DegenerateHull { reason: String },
}

impl HullError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateHull {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::InsufficientPoints { got, need } => {
                write!(f, "there must be at least {need} points (got {got})")
            }
            HullError::DegenerateHull { reason } => write!(f, "degenerate hull: {reason}"),
        }
    }
}

impl std::error::Error for HullError {}
