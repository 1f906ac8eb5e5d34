//! Mesh primitives: vertex, edge, triangle, and the `Mesh` container
//! that owns them.
//!
//! This crate is reexported by [`projmap`](../projmap/index.html).
//!
//! Coordinates never mutate after a vertex is pushed; the only mutable
//! state on a mesh is each vertex's tag bit, flipped by the tagging
//! pass to mark vertices referenced by at least one stencil.

mod id;
mod mesh;

pub use id::{EdgeId, MeshHandle, TriangleId, VertexId};
pub use mesh::{Edge, Mesh, Triangle, Vertex};
