//! Spatial indexing over mesh primitives.
//!
//! This crate is reexported by [`projmap`](../projmap/index.html).
//!
//! Builds bulk-loaded [`rstar`] trees over a mesh's vertices, edges and
//! triangles, and caches them per mesh, rebuilt when the mesh's version
//! counter advances.

mod cache;
mod mesh_index;
mod primitives;

pub use cache::IndexCache;
pub use mesh_index::MeshIndex;
