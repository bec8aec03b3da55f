//! Index types for wireframe elements.
//!
//! Type-safe wrappers around `u32` for node and element ids. Ids are dense
//! and zero-based at all times: the editor operations renumber on every
//! deletion, so an id doubles as the element's position in its array.

use std::fmt::{self, Debug};

const INVALID: u32 = u32::MAX;

/// A type-safe node (point) index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

/// A type-safe element (edge) index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct ElemId(u32);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl $name {
            /// Create a new index from a raw value.
            #[inline]
            pub fn new(index: usize) -> Self {
                debug_assert!(index < INVALID as usize);
                Self(index as u32)
            }

            /// Create an invalid/null index.
            #[inline]
            pub fn invalid() -> Self {
                Self(INVALID)
            }

            /// Get the raw index value.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Check if this is a valid (non-null) index.
            #[inline]
            pub fn is_valid(self) -> bool {
                self.0 != INVALID
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $display, self.index())
                } else {
                    write!(f, "{}(INVALID)", $display)
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::invalid()
            }
        }

        impl From<usize> for $name {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_index_type!(NodeId, "N");
impl_index_type!(ElemId, "E");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_round_trip() {
        let n = NodeId::new(42);
        assert_eq!(n.index(), 42);
        assert!(n.is_valid());
        assert!(!NodeId::invalid().is_valid());
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", NodeId::new(7)), "N(7)");
        assert_eq!(format!("{:?}", ElemId::invalid()), "E(INVALID)");
    }
}
