//! Point and vector type aliases on top of [`euclid`].
//!
//! Always `f64`: field values move through this library as doubles, and
//! there is no use for a lower-precision point type here. Meshes of
//! either dimension are represented with the 3D set below (2D points
//! carry `z == 0`), so there is no separate 2D point/vector type.

use euclid::UnknownUnit;

pub type Point3 = euclid::Point3D<f64, UnknownUnit>;
pub type Vector3 = euclid::Vector3D<f64, UnknownUnit>;

#[inline]
pub fn point3(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}
