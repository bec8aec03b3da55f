//! Boundary-face reconstruction from wireframes.
//!
//! This module recovers the closed polygonal faces implied by an unordered
//! 3D point set and a list of connecting edges (straight segments or circular
//! arcs given by a third on-arc point), and computes each face's area and
//! centroid. Arc-bounded faces get an exact circular-segment area correction.
//!
//! # Pipeline
//!
//! Reconstruction is a pure function of its inputs and runs in four stages:
//!
//! 1. [`rings`] orders the neighbors of every vertex rotationally in a
//!    tangent plane oriented away from the global point centroid.
//! 2. [`halfedge`] splits every edge into two directed half-edges with twin
//!    pairing and O(1) lookup.
//! 3. [`walk`] traverses the resulting rotation system, extracting oriented
//!    closed loops and consuming each directed edge at most once.
//! 4. [`props`] evaluates per-face area (shoelace area vector plus signed
//!    circular-segment corrections) and a vertex-average centroid.
//!
//! # Example
//!
//! ```
//! use nalgebra::Point3;
//! use tracery::recon::{reconstruct, WireEdge};
//!
//! // Two points joined by a straight chord and a semicircular arc.
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(2.0, 0.0, 0.0),
//! ];
//! let edges = vec![
//!     WireEdge::line(0, 1),
//!     WireEdge::arc(0, 1, Point3::new(1.0, 1.0, 0.0)),
//! ];
//!
//! let faces = reconstruct(&points, &edges).unwrap();
//!
//! // The lens between chord and arc has the area of a unit semicircle.
//! let semicircle = std::f64::consts::FRAC_PI_2;
//! assert!(faces.iter().any(|f| (f.area - semicircle).abs() < 1e-6));
//! ```
//!
//! # Degenerate input
//!
//! The engine never fails on geometrically degenerate input. Collinear arc
//! triples fall back to the straight chord, isolated and pendant points are
//! ignored, and inconsistent topology abandons the offending walk without
//! aborting the reconstruction. Only out-of-range edge endpoints are
//! rejected, with [`WireError::InvalidPointIndex`].
//!
//! [`WireError::InvalidPointIndex`]: crate::error::WireError::InvalidPointIndex

pub mod geom;
pub mod halfedge;
pub mod props;
pub mod rings;
pub mod walk;

use nalgebra::Point3;

use crate::error::{Result, WireError};

/// Squared-length threshold below which a direction is too degenerate to
/// orient a tangent plane.
pub(crate) const DEGENERATE_SQ: f64 = 1e-6;

/// Area-vector magnitude below which a face normal is unreliable.
pub(crate) const NORMAL_EPS: f64 = 1e-9;

/// Threshold for collinear arc triples and vanishing barycentric weights.
pub(crate) const COLLINEAR_EPS: f64 = 1e-12;

/// How an edge connects its two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeKind {
    /// A straight segment.
    Straight,
    /// A circular arc passing through the carried third point.
    Arc(Point3<f64>),
}

/// An undirected wireframe edge between two point indices.
///
/// Edge `i` of the input implicitly defines the directed half-edges `2i`
/// (`a` → `b`) and `2i + 1` (`b` → `a`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireEdge {
    /// First endpoint (0-based point index).
    pub a: usize,
    /// Second endpoint (0-based point index).
    pub b: usize,
    /// Straight segment or circular arc.
    pub kind: EdgeKind,
}

impl WireEdge {
    /// Create a straight edge between two point indices.
    pub fn line(a: usize, b: usize) -> Self {
        Self {
            a,
            b,
            kind: EdgeKind::Straight,
        }
    }

    /// Create an arc edge between two point indices, passing through `mid`.
    ///
    /// `mid` is a point *on* the arc (not the circle center); the circle is
    /// recovered from the three points during property evaluation.
    pub fn arc(a: usize, b: usize, mid: Point3<f64>) -> Self {
        Self {
            a,
            b,
            kind: EdgeKind::Arc(mid),
        }
    }

    /// The on-arc third point, if this edge is an arc.
    #[inline]
    pub fn arc_mid(&self) -> Option<&Point3<f64>> {
        match &self.kind {
            EdgeKind::Arc(mid) => Some(mid),
            EdgeKind::Straight => None,
        }
    }

    /// Check whether this edge is an arc.
    #[inline]
    pub fn is_arc(&self) -> bool {
        matches!(self.kind, EdgeKind::Arc(_))
    }
}

/// A reconstructed face: a closed vertex loop with derived properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// The closed walk of point indices bounding this face.
    pub points: Vec<usize>,
    /// Enclosed area, including circular-segment corrections. Never negative.
    pub area: f64,
    /// Arithmetic mean of the face's vertex coordinates.
    ///
    /// This is vertex-based, not mass-weighted by arc curvature, so it is an
    /// approximation for arc-bounded faces.
    pub centroid: Point3<f64>,
}

/// Reconstruct the closed faces implied by a wireframe.
///
/// Runs the full pipeline (angular rings, half-edges, rotation-system walk,
/// property evaluation) and returns one [`Face`] per recovered loop. The
/// inputs are only read; repeated calls on identical input produce identical
/// output.
///
/// # Errors
///
/// Returns [`WireError::InvalidPointIndex`] if any edge endpoint is outside
/// the point array. All other malformed input degrades gracefully to fewer
/// or degenerate faces.
pub fn reconstruct(points: &[Point3<f64>], edges: &[WireEdge]) -> Result<Vec<Face>> {
    for (i, e) in edges.iter().enumerate() {
        for point in [e.a, e.b] {
            if point >= points.len() {
                return Err(WireError::InvalidPointIndex { edge: i, point });
            }
        }
    }

    let rings = rings::build_rings(points, edges);
    let mut half = halfedge::HalfEdges::build(edges, &rings);
    let loops = walk::extract_loops(edges, &rings, &mut half);
    Ok(props::evaluate(&loops, points, edges))
}
