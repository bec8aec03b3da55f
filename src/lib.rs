//! # Tracery
//!
//! Boundary-face reconstruction for 3D wireframes.
//!
//! Given an unordered 3D point set and a list of connecting edges (straight
//! segments or circular arcs given by a third on-arc point), tracery
//! recovers the closed polygonal faces the wireframe implies and computes
//! each face's area and centroid, with exact circular-segment corrections
//! for arc-bounded faces.
//!
//! ## Features
//!
//! - **Rotation-system face extraction**: per-vertex angular neighbor rings
//!   built in tangent planes, walked through a flat half-edge structure
//! - **Arc-aware areas**: signed circular-segment corrections, including
//!   arcs spanning more than 180 degrees
//! - **Graceful degradation**: collinear arcs, isolated points, and
//!   inconsistent topology never abort a reconstruction
//! - **Editable model**: a wireframe container with dense, renumbered ids
//!   and plain-text import/export
//!
//! ## Quick Start
//!
//! ```
//! use nalgebra::Point3;
//! use tracery::prelude::*;
//!
//! // A unit square in the xy-plane.
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let edges = vec![
//!     WireEdge::line(0, 1),
//!     WireEdge::line(1, 2),
//!     WireEdge::line(2, 3),
//!     WireEdge::line(3, 0),
//! ];
//!
//! let faces = reconstruct(&points, &edges).unwrap();
//! for face in &faces {
//!     println!("area = {}, centroid = {:?}", face.area, face.centroid);
//! }
//! ```
//!
//! ## Working With a Wireframe Model
//!
//! ```
//! use nalgebra::Point3;
//! use tracery::wire::Wireframe;
//!
//! let mut wire = Wireframe::new();
//! let a = wire.add_node(Point3::new(0.0, 0.0, 0.0));
//! let b = wire.add_node(Point3::new(2.0, 0.0, 0.0));
//! wire.add_line(a, b);
//! wire.add_arc(a, b, Point3::new(1.0, 1.0, 0.0));
//!
//! wire.generate_faces().unwrap();
//! assert!(wire.faces().iter().any(|f| f.area > 1.5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod io;
pub mod recon;
pub mod wire;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use tracery::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, WireError};
    pub use crate::recon::{reconstruct, EdgeKind, Face, WireEdge};
    pub use crate::wire::{ElemId, Element, Node, NodeId, Wireframe};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
