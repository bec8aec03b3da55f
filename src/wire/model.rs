//! Editable wireframe container.
//!
//! [`Wireframe`] owns the nodes and elements an editor works on, keeps ids
//! dense and zero-based across deletions, and caches the face list produced
//! by the reconstruction engine. Reconstruction is on demand, never
//! incremental: [`Wireframe::generate_faces`] replaces the cached faces
//! wholesale with each call.

use nalgebra::Point3;

use super::index::{ElemId, NodeId};
use crate::error::Result;
use crate::recon::{self, EdgeKind, Face, WireEdge};

/// A wireframe node: an id plus a 3D position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Dense, zero-based id; always equal to the node's array position.
    pub id: NodeId,
    /// The 3D position of this node.
    pub position: Point3<f64>,
}

/// A wireframe element: a straight line or circular arc between two nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// Dense, zero-based id; always equal to the element's array position.
    pub id: ElemId,
    /// The start node.
    pub start: NodeId,
    /// The end node.
    pub end: NodeId,
    /// Straight segment or circular arc with an on-arc third point.
    pub kind: EdgeKind,
}

impl Element {
    /// Check whether this element is an arc.
    #[inline]
    pub fn is_arc(&self) -> bool {
        matches!(self.kind, EdgeKind::Arc(_))
    }
}

/// An editable collection of nodes and line/arc elements, with the faces
/// last reconstructed from them.
#[derive(Debug, Clone, Default)]
pub struct Wireframe {
    nodes: Vec<Node>,
    elems: Vec<Element>,
    faces: Vec<Face>,
}

impl Wireframe {
    /// Create an empty wireframe.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Editing ====================

    /// Add a node and return its id.
    pub fn add_node(&mut self, position: Point3<f64>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node { id, position });
        id
    }

    /// Add a straight line element between two nodes.
    pub fn add_line(&mut self, start: NodeId, end: NodeId) -> ElemId {
        self.push_elem(start, end, EdgeKind::Straight)
    }

    /// Add an arc element between two nodes, passing through `mid`.
    pub fn add_arc(&mut self, start: NodeId, end: NodeId, mid: Point3<f64>) -> ElemId {
        self.push_elem(start, end, EdgeKind::Arc(mid))
    }

    fn push_elem(&mut self, start: NodeId, end: NodeId, kind: EdgeKind) -> ElemId {
        let id = ElemId::new(self.elems.len());
        self.elems.push(Element {
            id,
            start,
            end,
            kind,
        });
        id
    }

    /// Remove the node at the given array position and renumber.
    ///
    /// Every node id above the deleted one is decremented, and element
    /// endpoints are rewritten to match, so ids stay dense and zero-based.
    /// Elements still referencing the deleted node are left dangling; call
    /// [`Wireframe::remove_elems_connected_to`] first to cascade.
    pub fn remove_node_at(&mut self, index: usize) {
        if index >= self.nodes.len() {
            return;
        }
        let deleted = self.nodes[index].id;
        self.nodes.remove(index);

        for node in &mut self.nodes {
            if node.id > deleted {
                node.id = NodeId::new(node.id.index() - 1);
            }
        }
        for elem in &mut self.elems {
            if elem.start > deleted {
                elem.start = NodeId::new(elem.start.index() - 1);
            }
            if elem.end > deleted {
                elem.end = NodeId::new(elem.end.index() - 1);
            }
        }
    }

    /// Remove every element incident to the given node.
    pub fn remove_elems_connected_to(&mut self, node: NodeId) {
        // Reverse order so renumbering cannot shift unvisited positions.
        for i in (0..self.elems.len()).rev() {
            let elem = &self.elems[i];
            if elem.start == node || elem.end == node {
                self.remove_elem_at(i);
            }
        }
    }

    /// Remove the element at the given array position and renumber.
    pub fn remove_elem_at(&mut self, index: usize) {
        if index >= self.elems.len() {
            return;
        }
        let deleted = self.elems[index].id;
        self.elems.remove(index);

        for elem in &mut self.elems {
            if elem.id > deleted {
                elem.id = ElemId::new(elem.id.index() - 1);
            }
        }
    }

    /// Remove all nodes, elements, and faces.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.elems.clear();
        self.faces.clear();
    }

    // ==================== Reconstruction ====================

    /// Reconstruct the face list from the current nodes and elements.
    ///
    /// The cached face list is replaced wholesale. Errors only on dangling
    /// element endpoints; degenerate geometry degrades gracefully inside
    /// [`recon::reconstruct`].
    pub fn generate_faces(&mut self) -> Result<()> {
        let points: Vec<Point3<f64>> = self.nodes.iter().map(|n| n.position).collect();
        let edges: Vec<WireEdge> = self
            .elems
            .iter()
            .map(|e| WireEdge {
                a: e.start.index(),
                b: e.end.index(),
                kind: e.kind,
            })
            .collect();

        self.faces = recon::reconstruct(&points, &edges)?;
        Ok(())
    }

    // ==================== Accessors ====================

    /// All nodes, in id order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All elements, in id order.
    #[inline]
    pub fn elems(&self) -> &[Element] {
        &self.elems
    }

    /// The faces from the most recent [`Wireframe::generate_faces`] call.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Get the number of nodes.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of elements.
    #[inline]
    pub fn num_elems(&self) -> usize {
        self.elems.len()
    }

    /// Get the number of cached faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Compute the bounding box of all nodes.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        if self.nodes.is_empty() {
            return None;
        }

        let mut min = self.nodes[0].position;
        let mut max = self.nodes[0].position;
        for node in &self.nodes {
            for i in 0..3 {
                min[i] = min[i].min(node.position[i]);
                max[i] = max[i].max(node.position[i]);
            }
        }
        Some((min, max))
    }
}
