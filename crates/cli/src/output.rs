//! JSON hull document written by `cli hull --out`.

use anyhow::{Context, Result};
use hull2d::{Hull, HullCfg, PointSet};
use serde::Serialize;
use std::path::Path;

use crate::input::Source;

/// Hull vertices plus the inputs needed to reproduce them.
#[derive(Debug, Serialize)]
pub struct HullDoc<'a> {
    pub algorithm: &'static str,
    pub winding: &'static str,
    pub input_points: usize,
    pub eps: f64,
    pub source: &'a Source,
    pub vertices: Vec<[f64; 2]>,
    pub hull2d: &'static str,
    pub code_rev: &'static str,
}

impl<'a> HullDoc<'a> {
    pub fn new(hull: &Hull, set: &PointSet, cfg: &HullCfg, source: &'a Source) -> Self {
        Self {
            algorithm: hull.algorithm.name(),
            winding: hull.winding().name(),
            input_points: set.len(),
            eps: cfg.eps,
            source,
            vertices: hull.coords(),
            hull2d: hull2d::VERSION,
            code_rev: option_env!("GIT_COMMIT").unwrap_or("unknown"),
        }
    }

    pub fn write(&self, out: &Path) -> Result<()> {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating output dir {}", parent.display()))?;
            }
        }
        std::fs::write(out, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", out.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull2d::{compute_hull, Algorithm};
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn doc_records_run_parameters() {
        let source = Source::Random { count: 12, seed: 9 };
        let set = source.load().unwrap();
        let hull = compute_hull(&set, Algorithm::GrahamScan).unwrap();
        let cfg = HullCfg::with_eps(1e-9);
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("h.json");
        HullDoc::new(&hull, &set, &cfg, &source).write(&out).unwrap();

        let doc: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["algorithm"], "graham-scan");
        assert_eq!(doc["winding"], "counter-clockwise");
        assert_eq!(doc["input_points"], 12);
        assert_eq!(doc["eps"], 1e-9);
        assert_eq!(doc["source"]["kind"], "random");
        assert_eq!(doc["source"]["seed"], 9);
        assert_eq!(doc["vertices"].as_array().unwrap().len(), hull.len());
        assert_eq!(doc["hull2d"], hull2d::VERSION);
    }
}
