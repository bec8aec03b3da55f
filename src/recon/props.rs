//! Face property evaluation: areas with circular-segment corrections,
//! and vertex-average centroids.
//!
//! The straight-edge polygon area comes from the shoelace area vector; every
//! arc edge bounding the face then contributes a signed circular-segment
//! correction. The subtended angle is computed in two legs (endpoint to
//! on-arc midpoint, midpoint to other endpoint) so arcs spanning more than
//! 180 degrees are handled correctly.

use std::f64::consts::PI;

use nalgebra::{Point3, Vector3};

use super::geom;
use super::walk::FaceLoop;
use super::{Face, WireEdge, NORMAL_EPS};

/// Evaluate area and centroid for every extracted loop.
///
/// Loops that resolve to too few points produce a zero-area, zero-centroid
/// placeholder rather than being dropped, so the face count is preserved.
/// Out-of-range vertex indices are skipped when materializing coordinates.
pub fn evaluate(loops: &[FaceLoop], points: &[Point3<f64>], edges: &[WireEdge]) -> Vec<Face> {
    loops
        .iter()
        .map(|l| evaluate_loop(l, points, edges))
        .collect()
}

fn evaluate_loop(l: &FaceLoop, points: &[Point3<f64>], edges: &[WireEdge]) -> Face {
    let resolved: Vec<Point3<f64>> = l
        .verts
        .iter()
        .filter_map(|&i| points.get(i).copied())
        .collect();

    // A two-vertex lens (chord + arc between the same endpoints) is the one
    // shape below 3 vertices that still encloses area.
    let lens = l.verts.len() == 2 && resolved.len() == 2;
    if resolved.len() < 3 && !lens {
        return Face {
            points: l.verts.clone(),
            area: 0.0,
            centroid: Point3::origin(),
        };
    }

    let area_vec = geom::polygon_area_vector(&resolved);
    let area_vec_len = area_vec.norm();
    let straight_area = 0.5 * area_vec_len;

    let normal = if area_vec_len > NORMAL_EPS {
        area_vec / area_vec_len
    } else {
        // Near-zero polygons give no reliable normal.
        Vector3::z()
    };

    let mut correction = 0.0;
    let n = l.verts.len();
    for i in 0..n {
        let edge = &edges[l.edges[i]];
        let Some(mid) = edge.arc_mid() else { continue };

        let idx1 = l.verts[i];
        let idx2 = l.verts[(i + 1) % n];
        let (Some(p1), Some(p2)) = (points.get(idx1), points.get(idx2)) else {
            continue;
        };
        correction += segment_correction(p1, p2, mid, &normal);
    }

    Face {
        points: l.verts.clone(),
        area: (straight_area + correction).max(0.0),
        centroid: geom::centroid(&resolved),
    }
}

/// Signed circular-segment area of the arc through `m` between `p1` and
/// `p2`, relative to a face with the given winding normal.
///
/// Positive means the arc bulges outward (the segment adds to the polygon
/// area); negative means it bulges inward. Collinear triples contribute
/// nothing and the chord stands in for the arc.
fn segment_correction(
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    m: &Point3<f64>,
    normal: &Vector3<f64>,
) -> f64 {
    let Some(center) = geom::circumcenter(p1, p2, m) else {
        return 0.0;
    };

    let to_p1 = p1 - center;
    let to_m = m - center;
    let to_p2 = p2 - center;

    let radius = to_p1.norm();
    // Two legs so an arc past 180 degrees keeps its full subtended angle.
    let total_angle = geom::vector_angle(&to_p1, &to_m) + geom::vector_angle(&to_m, &to_p2);

    let sector = 0.5 * radius * radius * total_angle;
    let chord_triangle = 0.5 * to_p1.cross(&to_p2).norm();
    let segment = if total_angle > PI {
        // Major arc: the chord triangle lies inside the sector's complement.
        sector + chord_triangle
    } else {
        sector - chord_triangle
    };

    // Winding test: is the on-arc point left or right of the chord?
    let dir = (p2 - p1).cross(&(m - p1)).dot(normal);
    if dir > 0.0 {
        // Bulges toward the polygon interior: the segment is carved out.
        -segment
    } else {
        segment
    }
}
