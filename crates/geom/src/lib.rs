//! Point, vector and projection math shared by the mesh mapping core.
//!
//! This crate is reexported by [`projmap`](../projmap/index.html).
//!
//! # Overview
//!
//! This crate implements the small amount of geometry the mapping core
//! needs:
//!
//! - 3D points and vectors, built on top of [`euclid`],
//! - closest-point projections of a query point onto a triangle, a
//!   line segment or a vertex, returning the weights of the projected
//!   point expressed as a combination of the primitive's corners,
//! - the interiority predicates used to decide whether a projection
//!   falls inside its primitive or must fall through to a
//!   lower-dimensional one.
//!
//! Dimension is a runtime property here (`2` or `3`), not a type
//! parameter: every point is stored as a 3D point, with `z == 0` for
//! 2D meshes. This keeps [`Triangle`] and [`Edge`] usable unchanged in
//! both dimensions, at the cost of a handful of `match d { ... }` calls
//! at the one or two sites that actually care.

pub use euclid;

mod point;
mod segment;
mod tolerance;
mod triangle;

pub use point::{point3, Point3, Vector3};
pub use segment::{project_point_edge, Edge, EdgeProjection};
pub use tolerance::{abs_diff_eq, eps_for_extent, BASE_EPS};
pub use triangle::{project_point_triangle, Triangle, TriangleProjection};

/// Projects `point` onto a single vertex, which is always interior:
/// the vertex's own coordinate is the stencil target with unit weight.
#[inline]
pub fn project_point_vertex() -> f64 {
    1.0
}
