//! Nearest-projection mesh mapping core.
//!
//! # Crates
//!
//! This meta-crate (`projmap`) reexports the following sub-crates for
//! convenience:
//!
//! * **projmap_geom** - point/vector primitives and the point→triangle,
//!   point→edge, point→vertex projection kernels.
//! * **projmap_mesh** - `Mesh`, its primitive ids, and the tag bit used
//!   by the tagging pass.
//! * **projmap_index** - bulk-loaded spatial indices over a mesh's
//!   primitives, cached per mesh.
//! * **projmap_engine** - the `NearestProjectionMapping` state machine,
//!   field transfer, and the tagging pass.
//!
//! Each `projmap_<name>` crate is reexported as a `<name>` module here.
//! For example:
//!
//! ```ignore
//! extern crate projmap_engine;
//! use projmap_engine::NearestProjectionMapping;
//! ```
//!
//! is equivalent to
//!
//! ```ignore
//! extern crate projmap;
//! use projmap::engine::NearestProjectionMapping;
//! ```
//!
//! # Example
//!
//! ```
//! use projmap::prelude::*;
//!
//! let mut input = Mesh::new("fluid", 2);
//! let a = input.push_vertex(projmap_geom::point3(0.0, 0.0, 0.0));
//! let b = input.push_vertex(projmap_geom::point3(1.0, 0.0, 0.0));
//! let c = input.push_vertex(projmap_geom::point3(0.0, 1.0, 0.0));
//! input.push_triangle(a, b, c);
//!
//! let mut output = Mesh::new("solid", 2);
//! output.push_vertex(projmap_geom::point3(0.25, 0.25, 0.0));
//!
//! let mut index_cache = projmap::index::IndexCache::new();
//! let mut mapping = NearestProjectionMapping::new(Constraint::Consistent, 2);
//! mapping.compute_mapping(&input, &output, &mut index_cache).unwrap();
//! assert!(mapping.has_computed_mapping());
//!
//! let source = [1.0, 2.0, 3.0];
//! let mut target = [0.0];
//! mapping.map(1, &source, &mut target).unwrap();
//! ```

pub extern crate projmap_engine;
pub extern crate projmap_geom;
pub extern crate projmap_index;
pub extern crate projmap_mesh;

pub use projmap_engine as engine;
pub use projmap_geom as geom;
pub use projmap_index as index;
pub use projmap_mesh as mesh;

mod capability;

pub use capability::Mapping;

/// Commonly used names, gathered in one place so a caller doesn't have
/// to import from each `projmap_<name>` crate individually.
pub mod prelude {
    pub use crate::capability::Mapping;
    pub use projmap_engine::{Constraint, MappingError, MappingResult, NearestProjectionMapping};
    pub use projmap_mesh::Mesh;
}
