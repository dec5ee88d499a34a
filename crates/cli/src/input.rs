//! Point sources for the CLI: worked example, seeded random grid points, CSV.

use anyhow::{bail, Context, Result};
use hull2d::sample::{random_grid_points, worked_example, GridBounds, ReplayToken};
use hull2d::PointSet;
use polars::prelude::*;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    WorkedExample,
    Random { count: usize, seed: u64 },
    Csv { path: PathBuf },
}

impl Source {
    pub fn load(&self) -> Result<PointSet> {
        match self {
            Source::WorkedExample => Ok(worked_example()),
            Source::Random { count, seed } => Ok(random_grid_points(
                *count,
                GridBounds::default(),
                ReplayToken::new(*seed),
            )),
            Source::Csv { path } => read_csv(path),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::WorkedExample => write!(f, "worked_example"),
            Source::Random { count, seed } => write!(f, "random(n={count}, seed={seed})"),
            Source::Csv { path } => write!(f, "csv({})", path.display()),
        }
    }
}

/// Read `x`,`y` columns (any numeric type) from a CSV with a header row.
fn read_csv(path: &Path) -> Result<PointSet> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    tracing::debug!(rows = df.height(), "input_csv_shape");

    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    collect_points(xs.into_iter().zip(ys.into_iter()))
        .with_context(|| format!("reading points from {}", path.display()))
}

/// Build a point set from nullable coordinate pairs; rows must be finite.
fn collect_points<I>(rows: I) -> Result<PointSet>
where
    I: IntoIterator<Item = (Option<f64>, Option<f64>)>,
{
    let mut set = PointSet::new();
    for (row, (x, y)) in rows.into_iter().enumerate() {
        match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => set.add_point(x, y),
            (Some(x), Some(y)) => bail!("row {row} has a non-finite coordinate ({x}, {y})"),
            _ => bail!("row {row} has a missing coordinate"),
        }
    }
    Ok(set)
}
