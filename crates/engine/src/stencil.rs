//! Interpolation elements, stencils, and the stencil table.

use projmap_mesh::{MeshHandle, VertexId};

/// A single (search-mesh vertex, weight) pair.
///
/// Carries the search mesh's [`MeshHandle`] alongside the vertex id so
/// a consumer can assert it is indexing into the mesh this element was
/// actually produced against — a cheap substitute for a pointer-identity
/// check, since a `VertexId` alone carries no information about which
/// mesh it came from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InterpolationElement {
    pub vertex: VertexId,
    pub mesh: MeshHandle,
    pub weight: f64,
}

/// A sparse linear combination of 1 to 3 search-mesh vertices
/// approximating a field value at one origin vertex.
///
/// Invariants: weights are finite, sum to `1 ± ε`, and there are at
/// most 3 entries. These are asserted by [`Stencil::new`] in debug
/// builds rather than re-checked on every read — a `Stencil` that
/// exists is assumed to already satisfy them.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Stencil {
    elements: Vec<InterpolationElement>,
}

/// Partition-of-unity tolerance used when validating a stencil's
/// weights.
pub const WEIGHT_SUM_EPS: f64 = 1e-9;

impl Stencil {
    pub fn new(elements: Vec<InterpolationElement>) -> Self {
        debug_assert!(!elements.is_empty() && elements.len() <= 3);
        debug_assert!(elements.iter().all(|e| e.weight.is_finite()));
        debug_assert!(
            (elements.iter().map(|e| e.weight).sum::<f64>() - 1.0).abs() < WEIGHT_SUM_EPS
        );
        Stencil { elements }
    }

    pub fn elements(&self) -> &[InterpolationElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// One [`Stencil`] per origin vertex, indexed by the origin vertex's
/// position in its mesh.
///
/// Lifecycle: emptied by `clear`, fully populated by `compute_mapping`,
/// consumed by `map` and `tag_mesh_first_round`.
#[derive(Clone, Debug, Default)]
pub struct StencilTable {
    stencils: Vec<Stencil>,
}

impl StencilTable {
    pub fn with_capacity(origin_count: usize) -> Self {
        StencilTable {
            stencils: Vec::with_capacity(origin_count),
        }
    }

    pub fn push(&mut self, stencil: Stencil) {
        self.stencils.push(stencil);
    }

    pub fn get(&self, origin: usize) -> Option<&Stencil> {
        self.stencils.get(origin)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stencil> {
        self.stencils.iter()
    }

    pub fn len(&self) -> usize {
        self.stencils.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stencils.is_empty()
    }

    pub fn clear(&mut self) {
        self.stencils.clear();
    }
}
