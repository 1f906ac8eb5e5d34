//! Field transfer: applies a populated [`StencilTable`] to move
//! per-vertex field values between meshes.
//!
//! Fields are flat, interleaved slices (`[v0c0, v0c1, ..., v1c0, ...]`)
//! rather than a `Vec<Vec<f64>>` per component, matching how vertex
//! buffers are conventionally handed back in this codebase.

use crate::error::{MappingError, MappingResult};
use crate::stencil::StencilTable;

/// Checks that `input`/`output` agree with the table's shape and the
/// given component count. Whether the table itself is populated is the
/// caller's concern — see [`crate::engine::NearestProjectionMapping`]
/// — since a table that is merely empty because its origin mesh has
/// zero vertices is not an error.
fn check_dimensions(
    table: &StencilTable,
    components: usize,
    input: &[f64],
    output_len: usize,
    search_vertex_count: usize,
) -> MappingResult<()> {
    let expected_input_len = search_vertex_count * components;
    if input.len() != expected_input_len {
        return Err(MappingError::DimensionMismatch {
            expected: expected_input_len,
            found: input.len(),
        });
    }
    let expected_output_len = table.len() * components;
    if output_len != expected_output_len {
        return Err(MappingError::DimensionMismatch {
            expected: expected_output_len,
            found: output_len,
        });
    }
    Ok(())
}

/// *consistent* transfer: each origin vertex's output value is the
/// weighted sum of its stencil's search vertices, `out[i] = Σ w(S_i) *
/// in[stencil vertex]`.
///
/// `source_values` is indexed by the search mesh's vertex order, one
/// block of `components` values per vertex; `target_values` is
/// indexed by the origin mesh's vertex order the same way.
pub fn map_consistent(
    table: &StencilTable,
    search_vertex_count: usize,
    components: usize,
    source_values: &[f64],
    target_values: &mut [f64],
) -> MappingResult<()> {
    check_dimensions(
        table,
        components,
        source_values,
        target_values.len(),
        search_vertex_count,
    )?;

    for (origin_idx, stencil) in table.iter().enumerate() {
        let out = &mut target_values[origin_idx * components..(origin_idx + 1) * components];
        out.fill(0.0);
        for element in stencil.elements() {
            let base = element.vertex.to_usize() * components;
            let src = &source_values[base..base + components];
            for c in 0..components {
                out[c] += element.weight * src[c];
            }
        }
    }
    Ok(())
}

/// *conservative* transfer: the adjoint of [`map_consistent`]. Each
/// origin vertex's value is
/// *scattered*, weighted, into every search vertex its stencil
/// references, so the sum over all output values equals the sum over
/// all input values (the "integral-preserving" property the name
/// refers to).
///
/// `source_values` is indexed by the origin mesh's vertex order;
/// `target_values` is indexed by the search mesh's vertex order and
/// must be zeroed (or otherwise meaningful to accumulate into) by the
/// caller before the first call in a batch.
pub fn map_conservative(
    table: &StencilTable,
    search_vertex_count: usize,
    components: usize,
    source_values: &[f64],
    target_values: &mut [f64],
) -> MappingResult<()> {
    check_dimensions(
        table,
        components,
        target_values,
        source_values.len(),
        search_vertex_count,
    )?;

    for (origin_idx, stencil) in table.iter().enumerate() {
        let src = &source_values[origin_idx * components..(origin_idx + 1) * components];
        for element in stencil.elements() {
            let base = element.vertex.to_usize() * components;
            let dst = &mut target_values[base..base + components];
            for c in 0..components {
                dst[c] += element.weight * src[c];
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stencil::{InterpolationElement, Stencil};
    use projmap_mesh::{Mesh, VertexId};

    fn one_to_one_table(weight: f64) -> (StencilTable, projmap_mesh::MeshHandle) {
        let h = Mesh::new("search", 2).handle();
        let mut table = StencilTable::with_capacity(1);
        table.push(Stencil::new(vec![InterpolationElement {
            vertex: VertexId::from_usize(0),
            mesh: h,
            weight,
        }]));
        (table, h)
    }

    #[test]
    fn consistent_identity_copies_value() {
        let (table, _h) = one_to_one_table(1.0);
        let source = [42.0];
        let mut target = [0.0];
        map_consistent(&table, 1, 1, &source, &mut target).unwrap();
        assert_eq!(target[0], 42.0);
    }

    #[test]
    fn conservative_scatters_weighted_value() {
        let (table, _h) = one_to_one_table(0.5);
        let source = [10.0];
        let mut target = [0.0];
        map_conservative(&table, 1, 1, &source, &mut target).unwrap();
        assert_eq!(target[0], 5.0);
    }

    #[test]
    fn wrong_component_count_is_dimension_mismatch() {
        let (table, _h) = one_to_one_table(1.0);
        let source = [1.0, 2.0];
        let mut target = [0.0];
        let err = map_consistent(&table, 1, 1, &source, &mut target).unwrap_err();
        assert_eq!(err, MappingError::DimensionMismatch { expected: 1, found: 2 });
    }

    #[test]
    fn empty_table_with_zero_length_buffers_is_a_noop() {
        let table = StencilTable::default();
        let source = [1.0];
        let mut target: [f64; 0] = [];
        map_consistent(&table, 1, 1, &source, &mut target).unwrap();
    }
}
