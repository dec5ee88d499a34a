use super::*;
use crate::sample::{circle_points, random_disk_points, worked_example, ReplayToken};
use nalgebra::vector;

fn set(raw: &[[f64; 2]]) -> PointSet {
    raw.iter().map(|p| vector![p[0], p[1]]).collect()
}

fn sorted_xy(points: &[Point]) -> Vec<[f64; 2]> {
    let mut v: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap());
    v
}

#[test]
fn square_with_center_both_algorithms() {
    let pts = set(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [2.0, 2.0]]);
    let gw = compute_hull(&pts, Algorithm::GiftWrap).unwrap();
    let gs = compute_hull(&pts, Algorithm::GrahamScan).unwrap();
    assert_eq!(
        gw.coords(),
        vec![[0.0, 0.0], [0.0, 4.0], [4.0, 4.0], [4.0, 0.0]]
    );
    assert_eq!(
        gs.coords(),
        vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]
    );
    assert_eq!(gw.winding(), Winding::Clockwise);
    assert_eq!(gs.winding(), Winding::CounterClockwise);
    assert!((gw.signed_area() + 16.0).abs() < 1e-12);
    assert!((gs.signed_area() - 16.0).abs() < 1e-12);
}

#[test]
fn worked_example_hull() {
    let pts = worked_example();
    let gw = pts.hull(Algorithm::GiftWrap).unwrap();
    assert_eq!(
        gw.coords(),
        vec![[2.0, 5.0], [3.0, 11.0], [5.0, 12.4], [11.0, 10.0], [10.0, 1.0]]
    );
    let gs = pts.hull(Algorithm::GrahamScan).unwrap();
    assert_eq!(
        gs.coords(),
        vec![[10.0, 1.0], [11.0, 10.0], [5.0, 12.4], [3.0, 11.0], [2.0, 5.0]]
    );
}

#[test]
fn triangle_with_interior_point_excludes_it() {
    let pts = set(&[[0.0, 0.0], [6.0, 0.0], [1.0, 1.0], [3.0, 5.0]]);
    for algo in Algorithm::ALL {
        let h = compute_hull(&pts, algo).unwrap();
        assert_eq!(
            sorted_xy(&h.vertices),
            vec![[0.0, 0.0], [3.0, 5.0], [6.0, 0.0]],
            "{algo}"
        );
    }
}

#[test]
fn circle_points_are_all_extremal() {
    let pts = circle_points(24, 5.0, 0.3);
    for algo in Algorithm::ALL {
        let h = compute_hull(&pts, algo).unwrap();
        assert_eq!(h.len(), pts.len(), "{algo}");
        assert_eq!(sorted_xy(&h.vertices), sorted_xy(pts.as_slice()), "{algo}");
    }
}

#[test]
fn algorithms_agree_on_random_disks_seeded() {
    for index in 0..20 {
        let pts = random_disk_points(60, 1.0, ReplayToken { seed: 2025, index });
        let gw = compute_hull(&pts, Algorithm::GiftWrap).unwrap();
        let gs = compute_hull(&pts, Algorithm::GrahamScan).unwrap();
        assert_eq!(sorted_xy(&gw.vertices), sorted_xy(&gs.vertices));
        // Same polygon traversed in opposite directions.
        assert!((gw.signed_area() + gs.signed_area()).abs() < 1e-9);
        for v in gw.iter() {
            assert!(pts.iter().any(|p| p == v));
        }
    }
}

#[test]
fn errors_surface_to_caller() {
    let mut pts = PointSet::new();
    pts.add_point(0.0, 0.0);
    pts.add_point(1.0, 1.0);
    for algo in Algorithm::ALL {
        assert_eq!(
            compute_hull(&pts, algo),
            Err(HullError::InsufficientPoints { got: 2, need: 3 })
        );
    }
    // More points, still on one line.
    pts.add_point(5.0, 5.0);
    for algo in Algorithm::ALL {
        let err = compute_hull(&pts, algo).unwrap_err();
        assert!(matches!(err, HullError::DegenerateHull { .. }));
        assert!(err.to_string().starts_with("degenerate hull"));
    }
}

#[test]
fn recomputation_is_fresh_and_deterministic() {
    let pts = worked_example();
    let a = compute_hull(&pts, Algorithm::GiftWrap).unwrap();
    let b = compute_hull(&pts, Algorithm::GiftWrap).unwrap();
    assert_eq!(a, b);
}

#[test]
fn sink_sees_start_and_close() {
    let pts = worked_example();
    let mut events: Vec<HullEvent> = Vec::new();
    let h = compute_hull_with(&pts, Algorithm::GiftWrap, &HullCfg::default(), &mut events).unwrap();
    assert_eq!(
        events.first(),
        Some(&HullEvent::Sorted {
            axis: Axis::X,
            len: 9
        })
    );
    assert_eq!(events.get(1), Some(&HullEvent::Start { point: vector![2.0, 5.0] }));
    assert_eq!(events.last(), Some(&HullEvent::Closed { vertices: h.len() }));
    let accepted = events
        .iter()
        .filter(|e| matches!(e, HullEvent::Accepted { .. }))
        .count();
    assert_eq!(accepted, h.len() - 1);
}

#[test]
fn eps_does_not_pull_wrap_inside_an_edge() {
    // (2, 1e-12) sits just above the bottom edge, inside the triangle.
    let pts = set(&[[0.0, 0.0], [4.0, 0.0], [2.0, 1e-12], [2.0, 3.0]]);
    let exact = compute_hull(&pts, Algorithm::GiftWrap).unwrap();
    let loose = compute_hull_with(
        &pts,
        Algorithm::GiftWrap,
        &HullCfg::with_eps(1e-9),
        &mut NullSink,
    )
    .unwrap();
    assert_eq!(loose, exact);
    assert_eq!(
        loose.coords(),
        vec![[0.0, 0.0], [2.0, 3.0], [4.0, 0.0]]
    );
}

#[test]
fn gift_wrap_with_eps_closes_on_random_disks_seeded() {
    let cfg = HullCfg::with_eps(1e-2);
    for seed in 0..300 {
        let pts = random_disk_points(40, 1.0, ReplayToken::new(seed));
        let gw = compute_hull_with(&pts, Algorithm::GiftWrap, &cfg, &mut NullSink)
            .unwrap_or_else(|e| panic!("seed {seed}: {e}"));
        let n = gw.len();
        for i in 0..n {
            let (a, b) = (gw.vertices[i], gw.vertices[(i + 1) % n]);
            assert!(pts.iter().all(|&q| orient(a, b, q) != Turn::Left), "seed {seed}");
        }
        // Tolerance only widens the candidate filter; the chosen edges stay exact.
        assert_eq!(gw, compute_hull(&pts, Algorithm::GiftWrap).unwrap(), "seed {seed}");
    }
}

#[test]
fn algorithm_names_parse() {
    for algo in Algorithm::ALL {
        assert_eq!(algo.name().parse::<Algorithm>(), Ok(algo));
    }
    assert!("quickhull".parse::<Algorithm>().is_err());
}
