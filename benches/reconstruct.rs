//! Benchmarks for wireframe face reconstruction.

use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::Point3;
use tracery::prelude::*;

/// Star-shaped "drum": two n-gon rings at z = -1 and z = 1 joined by
/// vertical edges. Reconstruction recovers n side quads plus the two caps.
fn drum_wireframe(n: usize) -> (Vec<Point3<f64>>, Vec<WireEdge>) {
    let mut points = Vec::with_capacity(2 * n);
    for &z in &[-1.0, 1.0] {
        for i in 0..n {
            let t = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            points.push(Point3::new(t.cos(), t.sin(), z));
        }
    }

    let mut edges = Vec::with_capacity(3 * n);
    for ring in 0..2 {
        let base = ring * n;
        for i in 0..n {
            edges.push(WireEdge::line(base + i, base + (i + 1) % n));
        }
    }
    for i in 0..n {
        edges.push(WireEdge::line(i, i + n));
    }
    (points, edges)
}

fn bench_reconstruct(c: &mut Criterion) {
    for n in [16, 128] {
        let (points, edges) = drum_wireframe(n);
        c.bench_function(format!("reconstruct_drum_{}", n).as_str(), |b| {
            b.iter(|| reconstruct(&points, &edges).unwrap())
        });
    }
}

fn bench_reconstruct_with_arcs(c: &mut Criterion) {
    // Same drum, but every vertical edge bulges outward as an arc.
    let n = 64;
    let (points, mut edges) = drum_wireframe(n);
    for i in 0..n {
        let t = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
        edges[2 * n + i] = WireEdge::arc(i, i + n, Point3::new(1.2 * t.cos(), 1.2 * t.sin(), 0.0));
    }

    c.bench_function("reconstruct_drum_64_arcs", |b| {
        b.iter(|| reconstruct(&points, &edges).unwrap())
    });
}

criterion_group!(benches, bench_reconstruct, bench_reconstruct_with_arcs);
criterion_main!(benches);
