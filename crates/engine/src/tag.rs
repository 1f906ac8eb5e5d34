//! Tagging pass: marks, on a mesh, which vertices a mapping's stencils
//! actually reference.
//!
//! The second-round counterpart has no function here: it is a no-op for
//! this mapping flavour, so
//! [`crate::engine::NearestProjectionMapping::tag_mesh_second_round`]
//! is implemented directly on the engine without delegating here.

use projmap_mesh::Mesh;

use crate::stencil::StencilTable;

/// Sets the tag bit of every vertex referenced, with nonzero weight,
/// by any stencil in `table`. `mesh` must be the same mesh the table's
/// elements were built against — the *search* mesh the stencils
/// reference, not the origins mesh the stencils are indexed by.
///
/// Existing `true` tags are preserved, per [`Mesh::set_tag`].
pub fn apply_first_round_tags(table: &StencilTable, mesh: &mut Mesh) {
    for stencil in table.iter() {
        for element in stencil.elements() {
            debug_assert_eq!(element.mesh, mesh.handle(), "stencil element belongs to a different mesh");
            if element.weight != 0.0 {
                mesh.set_tag(element.vertex, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stencil::InterpolationElement;
    use crate::stencil::Stencil;
    use projmap_geom::point3;
    use projmap_mesh::VertexId;

    #[test]
    fn tags_only_referenced_vertices() {
        let mut mesh = Mesh::new("search", 2);
        let v0 = mesh.push_vertex(point3(0.0, 0.0, 0.0));
        let v1 = mesh.push_vertex(point3(1.0, 0.0, 0.0));
        let handle = mesh.handle();

        let mut table = StencilTable::with_capacity(1);
        table.push(Stencil::new(vec![InterpolationElement {
            vertex: v0,
            mesh: handle,
            weight: 1.0,
        }]));

        apply_first_round_tags(&table, &mut mesh);
        assert!(mesh.tag(v0));
        assert!(!mesh.tag(v1));
    }

    #[test]
    fn preexisting_tags_are_not_cleared() {
        let mut mesh = Mesh::new("search", 2);
        let v0 = mesh.push_vertex(point3(0.0, 0.0, 0.0));
        let v1 = mesh.push_vertex(point3(1.0, 0.0, 0.0));
        mesh.set_tag(v1, true);
        let handle = mesh.handle();

        let mut table = StencilTable::with_capacity(1);
        table.push(Stencil::new(vec![InterpolationElement {
            vertex: v0,
            mesh: handle,
            weight: 1.0,
        }]));

        apply_first_round_tags(&table, &mut mesh);
        assert!(mesh.tag(v0));
        assert!(mesh.tag(v1));
    }
}
