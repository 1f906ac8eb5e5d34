//! The `Mesh` container: an insertion-ordered, position-addressed
//! collection of vertices, edges and triangles.
//!
//! Plain parallel `Vec` buffers addressed by id/position, `Clone` +
//! `Default` derives, no hidden indirection.

use projmap_geom::Point3;

use crate::id::{EdgeId, MeshHandle, TriangleId, VertexId};

/// A vertex: an immutable coordinate plus a mutable tag bit. The tag
/// lives in the owning `Mesh`, not on the vertex itself, so a `Vertex`
/// snapshot stays a plain `Copy` value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub point: Point3,
}

/// An edge: an ordered pair of vertex ids belonging to a single mesh.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: VertexId,
    pub to: VertexId,
}

/// A triangle: an ordered triple of vertex ids belonging to a single
/// mesh.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    pub id: TriangleId,
    pub a: VertexId,
    pub b: VertexId,
    pub c: VertexId,
}

/// A named, insertion-ordered mesh: vertices, edges and triangles,
/// each addressable by their position.
///
/// Invariant: every edge and triangle references vertices belonging to
/// this same mesh. `push_edge`/`push_triangle`
/// panic if given an out-of-range vertex id — the enclosing mesh
/// loader is expected to build meshes bottom-up (vertices first), so
/// this can never legitimately happen and is a loader bug if it does.
#[derive(Clone, Debug)]
pub struct Mesh {
    name: String,
    dimension: u8,
    handle: MeshHandle,
    version: u64,
    points: Vec<Point3>,
    tags: Vec<bool>,
    edges: Vec<(VertexId, VertexId)>,
    triangles: Vec<(VertexId, VertexId, VertexId)>,
}

impl Mesh {
    /// Creates an empty mesh of the given `name` and dimension (`2` or
    /// `3`).
    pub fn new(name: impl Into<String>, dimension: u8) -> Self {
        assert!(dimension == 2 || dimension == 3, "dimension must be 2 or 3");
        Mesh {
            name: name.into(),
            dimension,
            handle: MeshHandle::next(),
            version: 0,
            points: Vec::new(),
            tags: Vec::new(),
            edges: Vec::new(),
            triangles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    pub fn handle(&self) -> MeshHandle {
        self.handle
    }

    /// Bumped on every mutation; `projmap-index` compares this against
    /// the version an index was built for to decide whether to rebuild
    /// it.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn push_vertex(&mut self, point: Point3) -> VertexId {
        let id = VertexId::from_usize(self.points.len());
        self.points.push(point);
        self.tags.push(false);
        self.version += 1;
        id
    }

    pub fn push_edge(&mut self, from: VertexId, to: VertexId) -> EdgeId {
        assert!(from.to_usize() < self.points.len());
        assert!(to.to_usize() < self.points.len());
        let id = EdgeId::from_usize(self.edges.len());
        self.edges.push((from, to));
        self.version += 1;
        id
    }

    pub fn push_triangle(&mut self, a: VertexId, b: VertexId, c: VertexId) -> TriangleId {
        assert!(a.to_usize() < self.points.len());
        assert!(b.to_usize() < self.points.len());
        assert!(c.to_usize() < self.points.len());
        let id = TriangleId::from_usize(self.triangles.len());
        self.triangles.push((a, b, c));
        self.version += 1;
        id
    }

    pub fn vertex(&self, id: VertexId) -> Vertex {
        Vertex {
            id,
            point: self.points[id.to_usize()],
        }
    }

    pub fn edge(&self, id: EdgeId) -> Edge {
        let (from, to) = self.edges[id.to_usize()];
        Edge { id, from, to }
    }

    pub fn triangle(&self, id: TriangleId) -> Triangle {
        let (a, b, c) = self.triangles[id.to_usize()];
        Triangle { id, a, b, c }
    }

    pub fn point(&self, id: VertexId) -> Point3 {
        self.points[id.to_usize()]
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.points.len()).map(VertexId::from_usize)
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId::from_usize)
    }

    pub fn triangle_ids(&self) -> impl Iterator<Item = TriangleId> {
        (0..self.triangles.len()).map(TriangleId::from_usize)
    }

    pub fn tag(&self, id: VertexId) -> bool {
        self.tags[id.to_usize()]
    }

    /// Sets a vertex's tag bit. Existing `true` tags are never cleared
    /// by the mapping core: `tagged` is OR'd into the current value
    /// rather than overwriting it.
    pub fn set_tag(&mut self, id: VertexId, tagged: bool) {
        self.tags[id.to_usize()] |= tagged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projmap_geom::point3;

    #[test]
    fn push_and_read_back() {
        let mut mesh = Mesh::new("M1", 2);
        let v0 = mesh.push_vertex(point3(0.0, 0.0, 0.0));
        let v1 = mesh.push_vertex(point3(1.0, 0.0, 0.0));
        let v2 = mesh.push_vertex(point3(0.0, 1.0, 0.0));
        let e = mesh.push_edge(v0, v1);
        let t = mesh.push_triangle(v0, v1, v2);

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.edge(e).from, v0);
        assert_eq!(mesh.triangle(t).c, v2);
        assert_eq!(mesh.version(), 5);
    }

    #[test]
    fn tags_default_false_and_latch_true() {
        let mut mesh = Mesh::new("M1", 2);
        let v0 = mesh.push_vertex(point3(0.0, 0.0, 0.0));
        assert!(!mesh.tag(v0));
        mesh.set_tag(v0, true);
        assert!(mesh.tag(v0));
    }

    #[test]
    #[should_panic]
    fn edge_referencing_foreign_vertex_panics() {
        let mut mesh = Mesh::new("M1", 2);
        mesh.push_edge(VertexId::from_usize(0), VertexId::from_usize(1));
    }
}
