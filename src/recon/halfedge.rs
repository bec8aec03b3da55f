//! Directed half-edge storage for the face walk.
//!
//! Every undirected input edge `i` contributes two mutually-twinned directed
//! edges: `2i` running `a -> b` and `2i + 1` running `b -> a`. All state is
//! held in flat arrays indexed by directed-edge id, including the explicit
//! `used` flags that are the only mutable state of the face extraction.

use std::collections::HashMap;

use super::rings::Ring;
use super::WireEdge;

/// Flat directed-edge arrays plus the ring reverse lookup.
#[derive(Debug)]
pub struct HalfEdges {
    /// Tail vertex of each directed edge.
    pub tail: Vec<usize>,
    /// Head vertex of each directed edge.
    pub head: Vec<usize>,
    /// The oppositely-directed edge over the same undirected edge.
    pub twin: Vec<usize>,
    /// Whether each directed edge has been consumed into a face walk.
    /// Transitions false -> true exactly once.
    pub used: Vec<bool>,
    /// Per vertex: position of each incident edge within its angular ring.
    ring_pos: Vec<HashMap<usize, usize>>,
}

impl HalfEdges {
    /// Build the directed-edge arrays and the ring-position lookup.
    pub fn build(edges: &[WireEdge], rings: &[Ring]) -> Self {
        let n = edges.len() * 2;
        let mut tail = vec![0; n];
        let mut head = vec![0; n];
        let mut twin = vec![0; n];

        for (ei, e) in edges.iter().enumerate() {
            let fwd = 2 * ei;
            let rev = 2 * ei + 1;

            tail[fwd] = e.a;
            head[fwd] = e.b;
            tail[rev] = e.b;
            head[rev] = e.a;

            twin[fwd] = rev;
            twin[rev] = fwd;
        }

        let ring_pos = rings
            .iter()
            .map(|ring| {
                ring.iter()
                    .enumerate()
                    .map(|(i, entry)| (entry.edge, i))
                    .collect()
            })
            .collect();

        Self {
            tail,
            head,
            twin,
            used: vec![false; n],
            ring_pos,
        }
    }

    /// Directed-edge id of `edge` leaving `tail_vertex`.
    ///
    /// For a self-loop both directions share a tail; the forward id wins.
    #[inline]
    pub fn directed(&self, edge: usize, tail_vertex: usize) -> usize {
        let fwd = 2 * edge;
        if self.tail[fwd] == tail_vertex {
            fwd
        } else {
            fwd + 1
        }
    }

    /// Position of `edge` within `vertex`'s angular ring, if present.
    #[inline]
    pub fn ring_pos(&self, vertex: usize, edge: usize) -> Option<usize> {
        self.ring_pos[vertex].get(&edge).copied()
    }

    /// Number of directed edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.tail.len()
    }

    /// Check whether there are no directed edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tail.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recon::rings;
    use nalgebra::Point3;

    fn triangle() -> (Vec<Point3<f64>>, Vec<WireEdge>) {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
        ];
        let edges = vec![
            WireEdge::line(0, 1),
            WireEdge::line(1, 2),
            WireEdge::line(2, 0),
        ];
        (points, edges)
    }

    #[test]
    fn twins_are_mutual() {
        let (points, edges) = triangle();
        let rings = rings::build_rings(&points, &edges);
        let half = HalfEdges::build(&edges, &rings);

        assert_eq!(half.len(), 6);
        for h in 0..half.len() {
            assert_eq!(half.twin[half.twin[h]], h);
            assert_eq!(half.tail[h], half.head[half.twin[h]]);
            assert_eq!(half.head[h], half.tail[half.twin[h]]);
        }
    }

    #[test]
    fn directed_ids_follow_edge_order() {
        let (points, edges) = triangle();
        let rings = rings::build_rings(&points, &edges);
        let half = HalfEdges::build(&edges, &rings);

        // Edge 1 connects (1, 2): forward id 2 runs 1 -> 2.
        assert_eq!(half.directed(1, 1), 2);
        assert_eq!(half.directed(1, 2), 3);
        assert_eq!(half.tail[2], 1);
        assert_eq!(half.head[2], 2);
    }

    #[test]
    fn ring_positions_cover_incident_edges() {
        let (points, edges) = triangle();
        let rings = rings::build_rings(&points, &edges);
        let half = HalfEdges::build(&edges, &rings);

        for (v, ring) in rings.iter().enumerate() {
            for (i, entry) in ring.iter().enumerate() {
                assert_eq!(half.ring_pos(v, entry.edge), Some(i));
            }
        }
        // Edge 1 is not incident to vertex 0.
        assert_eq!(half.ring_pos(0, 1), None);
    }
}
