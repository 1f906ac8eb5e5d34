use super::*;
use crate::error::MappingError;
use projmap_geom::{abs_diff_eq, point3};
use projmap_index::IndexCache;
use projmap_mesh::Mesh;

fn single_triangle_mesh() -> Mesh {
    let mut mesh = Mesh::new("search", 3);
    let a = mesh.push_vertex(point3(0.0, 0.0, 0.0));
    let b = mesh.push_vertex(point3(1.0, 0.0, 0.0));
    let c = mesh.push_vertex(point3(0.0, 1.0, 0.0));
    mesh.push_triangle(a, b, c);
    mesh
}

fn single_vertex_mesh(dimension: u8, p: (f64, f64, f64)) -> Mesh {
    let mut mesh = Mesh::new("origins", dimension);
    mesh.push_vertex(point3(p.0, p.1, p.2));
    mesh
}

#[test]
fn stale_stencils_before_first_compute() {
    let mapping = NearestProjectionMapping::new(Constraint::Consistent, 3);
    let source = [1.0];
    let mut target = [0.0; 3];
    let err = mapping.map(1, &source, &mut target).unwrap_err();
    assert_eq!(err, MappingError::StaleStencils);
}

#[test]
fn empty_search_space_is_fatal() {
    let empty = Mesh::new("search", 3);
    let origins = single_vertex_mesh(3, (0.0, 0.0, 0.0));
    let mut cache = IndexCache::new();
    let mut mapping = NearestProjectionMapping::new(Constraint::Consistent, 3);

    let err = mapping.compute_mapping(&empty, &origins, &mut cache).unwrap_err();
    assert_eq!(err, MappingError::EmptySearchSpace);
    assert!(!mapping.has_computed_mapping());
}

#[test]
fn fatal_error_resets_state_to_empty_even_after_prior_success() {
    let triangle_mesh = single_triangle_mesh();
    let vertex_mesh = single_vertex_mesh(3, (0.25, 0.25, 0.5));
    let mut cache = IndexCache::new();
    let mut mapping = NearestProjectionMapping::new(Constraint::Consistent, 3);

    mapping.compute_mapping(&triangle_mesh, &vertex_mesh, &mut cache).unwrap();
    assert!(mapping.has_computed_mapping());

    // A second, failing call against an empty search mesh must not leave
    // the previous (now stale) stencil table usable.
    let empty = Mesh::new("search", 3);
    let err = mapping.compute_mapping(&empty, &vertex_mesh, &mut cache).unwrap_err();
    assert_eq!(err, MappingError::EmptySearchSpace);
    assert!(!mapping.has_computed_mapping());
    assert!(mapping.table().is_empty());

    let source = [1.0, 0.0, 0.0];
    let mut target = [0.0];
    let err = mapping.map(1, &source, &mut target).unwrap_err();
    assert_eq!(err, MappingError::StaleStencils);
}

#[test]
fn dimension_mismatch_is_reported_by_map() {
    let triangle_mesh = single_triangle_mesh();
    let vertex_mesh = single_vertex_mesh(3, (0.25, 0.25, 0.5));
    let mut cache = IndexCache::new();
    let mut mapping = NearestProjectionMapping::new(Constraint::Consistent, 3);
    mapping.compute_mapping(&triangle_mesh, &vertex_mesh, &mut cache).unwrap();

    let wrong_source = [1.0, 0.0]; // search mesh has 3 vertices, not 2
    let mut target = [0.0];
    let err = mapping.map(1, &wrong_source, &mut target).unwrap_err();
    assert_eq!(err, MappingError::DimensionMismatch { expected: 3, found: 2 });
}

#[test]
fn missing_triangles_falls_back_to_edges() {
    let mut search = Mesh::new("search", 3);
    let v0 = search.push_vertex(point3(0.0, 0.0, 0.0));
    let v1 = search.push_vertex(point3(1.0, 0.0, 0.0));
    search.push_edge(v0, v1);

    let origins = single_vertex_mesh(3, (0.5, 1.0, 0.0));
    let mut cache = IndexCache::new();
    let mut mapping = NearestProjectionMapping::new(Constraint::Consistent, 3);
    mapping.compute_mapping(&search, &origins, &mut cache).unwrap();

    let stencil = mapping.table().get(0).unwrap();
    assert_eq!(stencil.len(), 2);
}

#[test]
fn missing_edges_falls_back_to_vertices() {
    let mut search = Mesh::new("search", 2);
    search.push_vertex(point3(0.0, 0.0, 0.0));
    search.push_vertex(point3(1.0, 0.0, 0.0));

    let origins = single_vertex_mesh(2, (0.6, 0.0, 0.0));
    let mut cache = IndexCache::new();
    let mut mapping = NearestProjectionMapping::new(Constraint::Consistent, 2);
    mapping.compute_mapping(&search, &origins, &mut cache).unwrap();

    let stencil = mapping.table().get(0).unwrap();
    assert_eq!(stencil.len(), 1);
    assert_eq!(stencil.elements()[0].weight, 1.0);
}

#[test]
fn degenerate_triangle_falls_back_to_edge_without_error() {
    let mut search = Mesh::new("search", 3);
    let v0 = search.push_vertex(point3(0.0, 0.0, 0.0));
    let v1 = search.push_vertex(point3(1.0, 0.0, 0.0));
    let v2 = search.push_vertex(point3(2.0, 0.0, 0.0));
    search.push_triangle(v0, v1, v2); // collinear corners: degenerate
    search.push_edge(v0, v1);

    let origins = single_vertex_mesh(3, (0.5, 0.1, 0.0));
    let mut cache = IndexCache::new();
    let mut mapping = NearestProjectionMapping::new(Constraint::Consistent, 3);
    mapping.compute_mapping(&search, &origins, &mut cache).unwrap();

    let stencil = mapping.table().get(0).unwrap();
    assert_eq!(stencil.len(), 2);
    let source = [0.0, 10.0];
    let mut target = [0.0];
    mapping.map(1, &source, &mut target).unwrap();
    assert!(abs_diff_eq(target[0], 5.0, 1e-9));
}

/// Two triangles tied on bounding-box distance to the query point: one
/// (`t1`) the query's barycentric coordinates reject as non-interior,
/// the other (`t2`) accepts. Requesting only the single nearest-by-box
/// candidate would, depending on tie-break order, sometimes hand back
/// `t1` and miss `t2` entirely; requesting `K_CANDIDATES` candidates
/// guarantees both are considered and the interior one wins.
#[test]
fn k_candidates_safety_margin_finds_interior_triangle_despite_bbox_tie() {
    let mut search = Mesh::new("search", 3);
    let a0 = search.push_vertex(point3(0.0, 0.0, 0.0));
    let b0 = search.push_vertex(point3(2.0, 0.0, 0.0));
    let c0 = search.push_vertex(point3(0.0, 2.0, 0.0));
    search.push_triangle(a0, b0, c0); // bbox [0,2]x[0,2], non-interior for q

    let a1 = search.push_vertex(point3(1.0, 1.0, 0.0));
    let b1 = search.push_vertex(point3(3.0, 1.0, 0.0));
    let c1 = search.push_vertex(point3(1.0, 3.0, 0.0));
    search.push_triangle(a1, b1, c1); // bbox [1,3]x[1,3], interior for q

    let origins = single_vertex_mesh(3, (1.5, 1.5, 0.0));
    let mut cache = IndexCache::new();
    let mut mapping = NearestProjectionMapping::new(Constraint::Consistent, 3);
    mapping.compute_mapping(&search, &origins, &mut cache).unwrap();

    let stencil = mapping.table().get(0).unwrap();
    assert_eq!(stencil.len(), 3);
    let vertices: Vec<_> = stencil.elements().iter().map(|e| e.vertex).collect();
    assert!(vertices.contains(&a1));
    assert!(vertices.contains(&b1));
    assert!(vertices.contains(&c1));

    let weight_of = |v| stencil.elements().iter().find(|e| e.vertex == v).unwrap().weight;
    assert!(abs_diff_eq(weight_of(a1), 0.5, 1e-9));
    assert!(abs_diff_eq(weight_of(b1), 0.25, 1e-9));
    assert!(abs_diff_eq(weight_of(c1), 0.25, 1e-9));
}

#[test]
fn one_index_cache_serves_two_mapping_instances() {
    let search = single_triangle_mesh();
    let origins_a = single_vertex_mesh(3, (0.25, 0.25, 0.5));
    let origins_b = single_vertex_mesh(3, (0.1, 0.1, 0.2));

    let mut cache = IndexCache::new();
    let mut mapping_a = NearestProjectionMapping::new(Constraint::Consistent, 3);
    let mut mapping_b = NearestProjectionMapping::new(Constraint::Consistent, 3);

    mapping_a.compute_mapping(&search, &origins_a, &mut cache).unwrap();
    mapping_b.compute_mapping(&search, &origins_b, &mut cache).unwrap();

    assert!(mapping_a.has_computed_mapping());
    assert!(mapping_b.has_computed_mapping());
    assert!(cache.contains(search.handle()));
}

#[test]
fn tag_mesh_first_round_clears_state_after_tagging() {
    let mut triangle_mesh = single_triangle_mesh();
    let mut vertex_mesh = single_vertex_mesh(3, (0.25, 0.25, 0.5));
    let mut cache = IndexCache::new();
    let mut mapping = NearestProjectionMapping::new(Constraint::Consistent, 3);

    mapping
        .tag_mesh_first_round(&mut triangle_mesh, &mut vertex_mesh, &mut cache)
        .unwrap();

    assert!(mapping.table().is_empty());
    assert!(!mapping.has_computed_mapping());
    assert!(triangle_mesh.vertex_ids().all(|v| triangle_mesh.tag(v)));
}
