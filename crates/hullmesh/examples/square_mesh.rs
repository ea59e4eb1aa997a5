//! Hull and mesh of a small point set, printed to stdout.
//!
//! Run: cargo run -p hullmesh --example square_mesh

use std::time::Instant;

use hullmesh::prelude::*;

fn main() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 4.0),
        Point::new(4.0, 4.0),
        Point::new(1.0, 3.0),
    ];

    let start = Instant::now();
    let hull = convex_hull(&points);
    let mesh = triangulate(&points);
    let elapsed_us = start.elapsed().as_secs_f64() * 1e6;

    println!("hull ({} vertices):", hull.len());
    for p in &hull {
        println!("  ({}, {})", p.x, p.y);
    }
    match mesh {
        Some(mesh) => {
            println!("mesh ({} triangles, area {}):", mesh.len(), mesh.area());
            for t in &mesh {
                let [a, b, c] = t.vertices();
                println!(
                    "  ({}, {}) ({}, {}) ({}, {})",
                    a.x, a.y, b.x, b.y, c.x, c.y
                );
            }
        }
        None => println!("mesh: none"),
    }
    println!("elapsed: {elapsed_us:.1} µs");
}
