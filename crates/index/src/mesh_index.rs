//! Bulk-loaded `rstar` trees over a single mesh's primitives.

use projmap_geom::Point3;
use projmap_mesh::{EdgeId, Mesh, TriangleId, VertexId};
use rstar::RTree;

use crate::primitives::{IndexedEdge, IndexedTriangle, IndexedVertex};

fn to_array(p: Point3) -> [f64; 3] {
    [p.x, p.y, p.z]
}

/// Up to three bulk-loaded trees (vertices, edges, triangles) over one
/// mesh. Built lazily by [`crate::IndexCache`] and rebuilt whenever the
/// mesh's version counter moves.
pub struct MeshIndex {
    vertices: Option<RTree<IndexedVertex>>,
    edges: Option<RTree<IndexedEdge>>,
    triangles: Option<RTree<IndexedTriangle>>,
}

impl MeshIndex {
    pub fn build(mesh: &Mesh) -> Self {
        let vertices = if mesh.vertex_count() > 0 {
            let items: Vec<_> = mesh
                .vertex_ids()
                .map(|id| IndexedVertex {
                    id,
                    point: to_array(mesh.point(id)),
                })
                .collect();
            Some(RTree::bulk_load(items))
        } else {
            None
        };

        let edges = if mesh.edge_count() > 0 {
            let items: Vec<_> = mesh
                .edge_ids()
                .map(|id| {
                    let e = mesh.edge(id);
                    IndexedEdge {
                        id,
                        from: to_array(mesh.point(e.from)),
                        to: to_array(mesh.point(e.to)),
                    }
                })
                .collect();
            Some(RTree::bulk_load(items))
        } else {
            None
        };

        let triangles = if mesh.triangle_count() > 0 {
            let items: Vec<_> = mesh
                .triangle_ids()
                .map(|id| {
                    let t = mesh.triangle(id);
                    IndexedTriangle {
                        id,
                        a: to_array(mesh.point(t.a)),
                        b: to_array(mesh.point(t.b)),
                        c: to_array(mesh.point(t.c)),
                    }
                })
                .collect();
            Some(RTree::bulk_load(items))
        } else {
            None
        };

        MeshIndex {
            vertices,
            edges,
            triangles,
        }
    }

    pub fn has_vertices(&self) -> bool {
        self.vertices.is_some()
    }

    pub fn has_edges(&self) -> bool {
        self.edges.is_some()
    }

    pub fn has_triangles(&self) -> bool {
        self.triangles.is_some()
    }

    /// The `k` nearest vertices to `point`, deterministically ordered
    /// by `(distance, id)`. Empty if the mesh has no vertices.
    pub fn nearest_vertices(&self, point: Point3, k: usize) -> Vec<VertexId> {
        let Some(tree) = &self.vertices else {
            return Vec::new();
        };
        let query = to_array(point);
        let mut candidates: Vec<(f64, VertexId)> = tree
            .nearest_neighbor_iter_with_distance_2(&query)
            .take(k)
            .map(|(item, dist2)| (dist2, item.id))
            .collect();
        candidates.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap().then(a.1.cmp(&b.1)));
        candidates.into_iter().map(|(_, id)| id).collect()
    }

    pub fn nearest_edges(&self, point: Point3, k: usize) -> Vec<EdgeId> {
        let Some(tree) = &self.edges else {
            return Vec::new();
        };
        let query = to_array(point);
        let mut candidates: Vec<(f64, EdgeId)> = tree
            .nearest_neighbor_iter_with_distance_2(&query)
            .take(k)
            .map(|(item, dist2)| (dist2, item.id))
            .collect();
        candidates.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap().then(a.1.cmp(&b.1)));
        candidates.into_iter().map(|(_, id)| id).collect()
    }

    pub fn nearest_triangles(&self, point: Point3, k: usize) -> Vec<TriangleId> {
        let Some(tree) = &self.triangles else {
            return Vec::new();
        };
        let query = to_array(point);
        let mut candidates: Vec<(f64, TriangleId)> = tree
            .nearest_neighbor_iter_with_distance_2(&query)
            .take(k)
            .map(|(item, dist2)| (dist2, item.id))
            .collect();
        candidates.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap().then(a.1.cmp(&b.1)));
        candidates.into_iter().map(|(_, id)| id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projmap_geom::point3;

    #[test]
    fn empty_mesh_yields_empty_queries() {
        let mesh = Mesh::new("M", 2);
        let index = MeshIndex::build(&mesh);
        assert!(index.nearest_vertices(point3(0.0, 0.0, 0.0), 4).is_empty());
        assert!(!index.has_vertices());
    }

    #[test]
    fn nearest_vertex_is_closest() {
        let mut mesh = Mesh::new("M", 2);
        let v0 = mesh.push_vertex(point3(0.0, 0.0, 0.0));
        let _v1 = mesh.push_vertex(point3(10.0, 0.0, 0.0));
        let index = MeshIndex::build(&mesh);
        let nearest = index.nearest_vertices(point3(0.1, 0.0, 0.0), 1);
        assert_eq!(nearest, vec![v0]);
    }

    #[test]
    fn ties_break_by_id() {
        let mut mesh = Mesh::new("M", 2);
        let v0 = mesh.push_vertex(point3(-1.0, 0.0, 0.0));
        let v1 = mesh.push_vertex(point3(1.0, 0.0, 0.0));
        let index = MeshIndex::build(&mesh);
        let nearest = index.nearest_vertices(point3(0.0, 0.0, 0.0), 2);
        assert_eq!(nearest, vec![v0, v1]);
    }
}
