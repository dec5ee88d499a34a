//! Run both hull algorithms on the nine-point worked example.
//!
//! Usage:
//!   cargo run -p hull2d --example worked_example
//!
//! Expected hull: (10, 1) (11, 10) (5, 12.4) (3, 11) (2, 5), in each
//! algorithm's own rotational order.

use hull2d::prelude::*;
use hull2d::sample::worked_example;

fn main() {
    let set = worked_example();
    for algo in [Algorithm::GiftWrap, Algorithm::GrahamScan] {
        match compute_hull(&set, algo) {
            Ok(hull) => {
                println!("{algo} ({}):", hull.winding().name());
                for [x, y] in hull.coords() {
                    println!("  [{x}, {y}]");
                }
            }
            Err(e) => eprintln!("{algo}: {e}"),
        }
    }
}
