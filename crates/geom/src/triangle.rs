//! Point-to-triangle projection.
//!
//! Uses the least-squares barycentric-coordinate formula (Ericson,
//! *Real-Time Collision Detection*), which projects onto a triangle's
//! plane in 3D as readily as in 2D.

use crate::point::{Point3, Vector3};
use crate::tolerance::eps_for_extent;

/// A triangle given by its three corner points, in their stable
/// winding order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point3,
    pub b: Point3,
    pub c: Point3,
}

/// The result of projecting a point onto a [`Triangle`]'s plane:
/// barycentric weights for `a`, `b`, `c` respectively, and the
/// (unsigned) distance from the query point to the plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleProjection {
    pub weights: (f64, f64, f64),
    pub plane_distance: f64,
}

impl TriangleProjection {
    /// Whether all three barycentric weights are non-negative (within
    /// `eps`), i.e. the projection lands inside the triangle rather
    /// than needing an edge/vertex fallback.
    #[inline]
    pub fn is_interior(&self, eps: f64) -> bool {
        self.weights.0 >= -eps && self.weights.1 >= -eps && self.weights.2 >= -eps
    }
}

impl Triangle {
    /// Conservative extent used to scale the interiority tolerance:
    /// the longest of the triangle's three edges.
    pub fn extent(&self) -> f64 {
        let ab = (self.b - self.a).length();
        let bc = (self.c - self.b).length();
        let ca = (self.a - self.c).length();
        ab.max(bc).max(ca)
    }

    /// `true` when the triangle's three corners are (near-)collinear,
    /// i.e. it has no well-defined plane.
    pub fn is_degenerate(&self) -> bool {
        let normal = self.normal_unnormalized();
        let eps = eps_for_extent(self.extent());
        normal.length() <= eps * eps
    }

    fn normal_unnormalized(&self) -> Vector3 {
        (self.b - self.a).cross(self.c - self.a)
    }

    /// Orthogonally projects `point` onto this triangle's plane and
    /// returns its barycentric weights plus the signed-turned-unsigned
    /// distance to the plane. Returns `None` for a degenerate
    /// (collinear-corner) triangle.
    pub fn project(&self, point: Point3) -> Option<TriangleProjection> {
        if self.is_degenerate() {
            return None;
        }

        let v0 = self.b - self.a;
        let v1 = self.c - self.a;
        let v2 = point - self.a;

        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);

        let denom = d00 * d11 - d01 * d01;
        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        let u = 1.0 - v - w;

        let normal = self.normal_unnormalized();
        let plane_distance = (point - self.a).dot(normal).abs() / normal.length();

        Some(TriangleProjection {
            weights: (u, v, w),
            plane_distance,
        })
    }
}

/// Convenience wrapper around [`Triangle::project`] taking corner
/// points directly.
pub fn project_point_triangle(
    point: Point3,
    a: Point3,
    b: Point3,
    c: Point3,
) -> Option<TriangleProjection> {
    Triangle { a, b, c }.project(point)
}
