//! `rstar` adapters for mesh primitives.
//!
//! Each wrapper carries just enough geometry to compute an envelope and
//! a candidate distance: the exact point for vertices, and the
//! bounding box for edges/triangles. Ranking candidates by
//! bounding-box distance rather than true geometric distance is why the
//! mapping engine asks for a handful of extra candidates (`k = 4`)
//! instead of just the single nearest one — the nearest box isn't
//! always the nearest primitive.

use projmap_mesh::{EdgeId, TriangleId, VertexId};
use rstar::{Envelope, RTreeObject, AABB};

fn envelope_of(points: &[[f64; 3]]) -> AABB<[f64; 3]> {
    let mut min = points[0];
    let mut max = points[0];
    for p in &points[1..] {
        for axis in 0..3 {
            min[axis] = min[axis].min(p[axis]);
            max[axis] = max[axis].max(p[axis]);
        }
    }
    AABB::from_corners(min, max)
}

/// An indexed vertex: exact point, so candidate ranking is exact too.
#[derive(Copy, Clone, Debug)]
pub struct IndexedVertex {
    pub id: VertexId,
    pub point: [f64; 3],
}

impl RTreeObject for IndexedVertex {
    type Envelope = AABB<[f64; 3]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl rstar::PointDistance for IndexedVertex {
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

/// An indexed edge: ranked by distance to its bounding box, not its
/// true distance-to-segment (that's recomputed exactly by the mapping
/// engine once candidates are shortlisted).
#[derive(Copy, Clone, Debug)]
pub struct IndexedEdge {
    pub id: EdgeId,
    pub from: [f64; 3],
    pub to: [f64; 3],
}

impl RTreeObject for IndexedEdge {
    type Envelope = AABB<[f64; 3]>;

    fn envelope(&self) -> Self::Envelope {
        envelope_of(&[self.from, self.to])
    }
}

impl rstar::PointDistance for IndexedEdge {
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        self.envelope().distance_2(point)
    }
}

/// An indexed triangle: ranked by distance to its bounding box.
#[derive(Copy, Clone, Debug)]
pub struct IndexedTriangle {
    pub id: TriangleId,
    pub a: [f64; 3],
    pub b: [f64; 3],
    pub c: [f64; 3],
}

impl RTreeObject for IndexedTriangle {
    type Envelope = AABB<[f64; 3]>;

    fn envelope(&self) -> Self::Envelope {
        envelope_of(&[self.a, self.b, self.c])
    }
}

impl rstar::PointDistance for IndexedTriangle {
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        self.envelope().distance_2(point)
    }
}
