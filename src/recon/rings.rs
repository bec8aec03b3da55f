//! Angular adjacency rings: the rotation system of the wireframe.
//!
//! For every vertex of degree >= 2, the incident edges are ordered
//! rotationally in a tangent plane perpendicular to the vertex's outward
//! direction. The outward direction is taken from one global reference
//! point, the centroid of all input points. This single ordering is the
//! rotation system the face walk traverses, so its correctness directly
//! determines which faces are recovered.
//!
//! The global-centroid heuristic assumes the wireframe is roughly
//! star-shaped around its centroid; strongly non-convex or multi-component
//! inputs can get mis-ordered rings and therefore missing faces. This is
//! inherited behavior, preserved deliberately.

use nalgebra::{Point3, Vector3};

use super::geom;
use super::{WireEdge, DEGENERATE_SQ};

/// One slot in a vertex's angular ring: a neighbor vertex reached through a
/// specific edge. Parallel edges occupy distinct slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingEntry {
    /// The neighbor point index.
    pub neighbor: usize,
    /// The undirected edge connecting the ring's vertex to `neighbor`.
    pub edge: usize,
}

/// The cyclic neighbor order around one vertex.
pub type Ring = Vec<RingEntry>;

/// Build the unordered adjacency of every vertex.
pub(crate) fn adjacency(num_points: usize, edges: &[WireEdge]) -> Vec<Vec<RingEntry>> {
    let mut adj = vec![Vec::new(); num_points];
    for (ei, e) in edges.iter().enumerate() {
        adj[e.a].push(RingEntry {
            neighbor: e.b,
            edge: ei,
        });
        adj[e.b].push(RingEntry {
            neighbor: e.a,
            edge: ei,
        });
    }
    adj
}

/// Build the angular ring of every vertex.
///
/// Vertices of degree 0 or 1 get an empty ring: they cannot bound a face
/// and are skipped by the downstream walk.
pub fn build_rings(points: &[Point3<f64>], edges: &[WireEdge]) -> Vec<Ring> {
    let adj = adjacency(points.len(), edges);
    let center = geom::centroid(points);

    let mut rings = vec![Ring::new(); points.len()];
    for (v, neighbors) in adj.iter().enumerate() {
        if neighbors.len() < 2 {
            continue;
        }

        let normal = outward_normal(&points[v], &center);
        let (e1, e2) = tangent_basis(points, v, neighbors, &normal);

        let mut with_angles: Vec<(RingEntry, f64)> = neighbors
            .iter()
            .map(|&entry| {
                let d = points[entry.neighbor] - points[v];
                let tangential = d - d.dot(&normal) * normal;
                let angle = tangential.dot(&e2).atan2(tangential.dot(&e1));
                (entry, angle)
            })
            .collect();

        // Stable sort: ties between coincident directions keep input order.
        with_angles.sort_by(|a, b| a.1.total_cmp(&b.1));
        rings[v] = with_angles.into_iter().map(|(entry, _)| entry).collect();
    }
    rings
}

/// Outward direction of a vertex relative to the global reference point.
fn outward_normal(p: &Point3<f64>, center: &Point3<f64>) -> Vector3<f64> {
    let n = p - center;
    if n.norm_squared() < DEGENERATE_SQ {
        // Vertex coincides with the reference point.
        return Vector3::z();
    }
    n.normalize()
}

/// Orthonormal basis of the tangent plane perpendicular to `normal`.
///
/// The first axis is seeded from the first incident edge direction; if its
/// tangential residual degenerates, the second edge and finally a fixed
/// x-axis are tried, re-projecting each time.
fn tangent_basis(
    points: &[Point3<f64>],
    v: usize,
    neighbors: &[RingEntry],
    normal: &Vector3<f64>,
) -> (Vector3<f64>, Vector3<f64>) {
    let project = |d: Vector3<f64>| d - d.dot(normal) * normal;

    let mut e1 = project(points[neighbors[0].neighbor] - points[v]);
    if e1.norm_squared() < DEGENERATE_SQ && neighbors.len() >= 2 {
        e1 = project(points[neighbors[1].neighbor] - points[v]);
    }
    if e1.norm_squared() < DEGENERATE_SQ {
        e1 = project(Vector3::x());
    }
    let e1 = e1.normalize();
    let e2 = normal.cross(&e1).normalize();
    (e1, e2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_zero_and_one_get_empty_rings() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(5.0, 5.0, 5.0),
        ];
        let edges = vec![WireEdge::line(0, 1)];

        let rings = build_rings(&points, &edges);
        assert!(rings[0].is_empty());
        assert!(rings[1].is_empty());
        assert!(rings[2].is_empty());
    }

    #[test]
    fn hub_ring_is_cyclically_ordered() {
        // A hub above the centroid with four spokes in the xy-plane. The
        // outward normal at the hub is close to +z, so the ring must order
        // the spokes by their polar angle around it.
        let points = vec![
            Point3::new(0.0, 0.0, 1.0), // hub
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
        ];
        let edges = vec![
            WireEdge::line(0, 1),
            WireEdge::line(0, 3), // deliberately out of rotational order
            WireEdge::line(0, 2),
            WireEdge::line(0, 4),
        ];
        // Spokes also need degree >= 2 at the rim to matter for walks, but
        // ring construction itself only needs the hub's degree.
        let rings = build_rings(&points, &edges);

        let ring: Vec<usize> = rings[0].iter().map(|e| e.neighbor).collect();
        assert_eq!(ring.len(), 4);

        // Accept any rotation of the cyclic order 1, 2, 3, 4 (CCW around +z).
        let start = ring.iter().position(|&n| n == 1).unwrap();
        let rotated: Vec<usize> = (0..4).map(|i| ring[(start + i) % 4]).collect();
        assert_eq!(rotated, vec![1, 2, 3, 4]);
    }

    #[test]
    fn vertex_at_reference_point_falls_back() {
        // A single point wired to two others placed symmetrically makes the
        // first point coincide with the centroid; the fallback normal keeps
        // the ring construction finite.
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
        ];
        let edges = vec![WireEdge::line(0, 1), WireEdge::line(0, 2)];

        let rings = build_rings(&points, &edges);
        assert_eq!(rings[0].len(), 2);
        for entry in &rings[0] {
            assert!(entry.neighbor == 1 || entry.neighbor == 2);
        }
    }

    #[test]
    fn parallel_edges_keep_distinct_slots() {
        let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)];
        let edges = vec![
            WireEdge::line(0, 1),
            WireEdge::arc(0, 1, Point3::new(1.0, 1.0, 0.0)),
        ];

        let rings = build_rings(&points, &edges);
        assert_eq!(rings[0].len(), 2);
        assert_ne!(rings[0][0].edge, rings[0][1].edge);
    }
}
