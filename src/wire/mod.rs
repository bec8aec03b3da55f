//! Editable wireframe data model.
//!
//! This module provides [`Wireframe`], the container an editor works on:
//! nodes (points) and elements (straight lines or circular arcs) with dense,
//! zero-based ids that are renumbered on every deletion, plus the face list
//! cached from the most recent reconstruction.
//!
//! # Example
//!
//! ```
//! use nalgebra::Point3;
//! use tracery::wire::Wireframe;
//!
//! let mut wire = Wireframe::new();
//! let a = wire.add_node(Point3::new(0.0, 0.0, 0.0));
//! let b = wire.add_node(Point3::new(1.0, 0.0, 0.0));
//! let c = wire.add_node(Point3::new(0.5, 1.0, 0.0));
//! wire.add_line(a, b);
//! wire.add_line(b, c);
//! wire.add_line(c, a);
//!
//! wire.generate_faces().unwrap();
//! assert!(wire.num_faces() > 0);
//! ```

mod index;
mod model;

pub use index::{ElemId, NodeId};
pub use model::{Element, Node, Wireframe};
