//! Stable identifiers for mesh primitives.
//!
//! Each id is a `Copy` wrapper around the primitive's position in its
//! mesh, with an `INVALID` sentinel for "no id yet".

use std::fmt;

macro_rules! primitive_id {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl $name {
            pub const INVALID: Self = $name(u32::MAX);

            #[inline]
            pub fn from_usize(index: usize) -> Self {
                debug_assert!(index < u32::MAX as usize);
                $name(index as u32)
            }

            #[inline]
            pub fn to_usize(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                if *self == Self::INVALID {
                    write!(f, concat!(stringify!($name), "(INVALID)"))
                } else {
                    write!(f, concat!(stringify!($name), "({})"), self.0)
                }
            }
        }
    };
}

primitive_id!(VertexId, "Identifies a vertex by its position in a `Mesh`.");
primitive_id!(EdgeId, "Identifies an edge by its position in a `Mesh`.");
primitive_id!(TriangleId, "Identifies a triangle by its position in a `Mesh`.");

/// Opaque identity assigned to a `Mesh` when it is constructed, used to
/// verify that a vertex reference held elsewhere actually aliases the
/// mesh it is about to be indexed into, without comparing addresses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(u64);

impl MeshHandle {
    pub(crate) fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        MeshHandle(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}
