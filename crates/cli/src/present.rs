//! Plain-text rendering of point sets and hulls.

use hull2d::{Hull, PointSet};
use std::fmt::Write;

fn push_pairs(out: &mut String, pairs: &[[f64; 2]]) {
    for [x, y] in pairs {
        let _ = writeln!(out, "[{x}, {y}]");
    }
}

pub fn points_text(set: &PointSet) -> String {
    if set.is_empty() {
        return "The set is empty\n".to_string();
    }
    let mut out = String::from("The points in the set are:\n");
    push_pairs(&mut out, &set.coords());
    out
}

pub fn hull_text(hull: &Hull) -> String {
    if hull.is_empty() {
        return "The hull is empty\n".to_string();
    }
    let mut out = String::from("The hull has the following points:\n");
    push_pairs(&mut out, &hull.coords());
    out
}
