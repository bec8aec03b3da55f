//! Geometric arithmetic shared by the reconstruction pipeline.
//!
//! Degenerate configurations are reported as values (`Option`, zero vectors)
//! rather than errors, so callers can skip a correction or fall back to a
//! default without aborting.

use nalgebra::{Point3, Vector3};

use super::COLLINEAR_EPS;

/// Arithmetic mean of a set of points.
///
/// Returns the origin for an empty slice.
pub fn centroid(points: &[Point3<f64>]) -> Point3<f64> {
    if points.is_empty() {
        return Point3::origin();
    }
    let sum: Vector3<f64> = points.iter().map(|p| p.coords).sum();
    Point3::from(sum / points.len() as f64)
}

/// Accumulated cross-product area vector of a closed polygon.
///
/// Consecutive vertex vectors are taken relative to the polygon's first
/// vertex, which keeps precision for polygons far from the origin. Half the
/// returned vector's length is the planar polygon area, and its direction is
/// the face normal. Returns the zero vector for fewer than 3 points.
pub fn polygon_area_vector(points: &[Point3<f64>]) -> Vector3<f64> {
    let n = points.len();
    if n < 3 {
        return Vector3::zeros();
    }

    let reference = points[0];
    let mut sum = Vector3::zeros();
    for i in 0..n {
        let v1 = points[i] - reference;
        let v2 = points[(i + 1) % n] - reference;
        sum += v1.cross(&v2);
    }
    sum
}

/// Center of the circle through three points, via the barycentric
/// circumcenter formula from the pairwise side lengths.
///
/// Returns `None` if the points are (nearly) collinear or the barycentric
/// weight sum vanishes, in which case no circle exists.
pub fn circumcenter(p1: &Point3<f64>, p2: &Point3<f64>, m: &Point3<f64>) -> Option<Point3<f64>> {
    let v1 = p2 - p1;
    let v2 = m - p1;
    if v1.cross(&v2).norm() < COLLINEAR_EPS {
        return None;
    }

    let a = (p2 - m).norm();
    let b = (p1 - m).norm();
    let c = (p1 - p2).norm();

    let a2 = a * a;
    let b2 = b * b;
    let c2 = c * c;

    let alpha = a2 * (b2 + c2 - a2);
    let beta = b2 * (c2 + a2 - b2);
    let gamma = c2 * (a2 + b2 - c2);

    let sum = alpha + beta + gamma;
    if sum.abs() < COLLINEAR_EPS {
        return None;
    }

    Some(Point3::from(
        (alpha * p1.coords + beta * p2.coords + gamma * m.coords) / sum,
    ))
}

/// Unsigned angle between two vectors, in `[0, PI]`.
///
/// Returns 0 if either vector is (nearly) zero. The cosine is clamped before
/// `acos` to guard against floating-point drift.
pub fn vector_angle(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let na = a.norm();
    let nb = b.norm();
    if na < COLLINEAR_EPS || nb < COLLINEAR_EPS {
        return 0.0;
    }
    (a.dot(b) / (na * nb)).clamp(-1.0, 1.0).acos()
}
