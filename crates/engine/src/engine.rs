//! The mapping engine: orchestrates the per-origin-vertex
//! triangle → edge → vertex cascade and owns the [`StencilTable`] it
//! produces.
//!
//! Meshes are borrowed fresh on each call rather than stashed in the
//! struct: the tagging pass needs a `&mut Mesh` to the same mesh
//! `compute_mapping` just read, and a struct field holding `&Mesh`
//! across calls would make that borrow impossible to satisfy. The
//! spatial index cache is likewise borrowed rather than owned, so one
//! cache can be shared read-write across several mapping instances
//! that query the same meshes.

use projmap_geom::{eps_for_extent, Edge as GeomEdge, Triangle as GeomTriangle};
use projmap_index::IndexCache;
use projmap_mesh::Mesh;

use crate::constraint::Constraint;
use crate::error::{MappingError, MappingResult};
use crate::sink::{EventSink, NoopEventSink};
use crate::stencil::{InterpolationElement, Stencil, StencilTable};
use crate::tag;

/// Number of bounding-box-nearest candidates considered per primitive
/// kind before re-ranking by true geometric distance. A fixed design
/// parameter, not user-tunable: the nearest bounding box is not always
/// the nearest primitive, and a handful of extra candidates is enough
/// margin to correct for that without re-ranking the whole mesh.
pub const K_CANDIDATES: usize = 4;

/// Tracks which once-per-`compute_mapping` warnings have already fired.
#[derive(Default)]
struct WarnGuard {
    degenerate_geometry_logged: bool,
}

impl WarnGuard {
    fn degenerate_geometry(&mut self, search_mesh: &str) {
        if !self.degenerate_geometry_logged {
            log::warn!(
                "{search_mesh}: degenerate primitive encountered during projection, falling through to a lower-dimensional primitive"
            );
            self.degenerate_geometry_logged = true;
        }
    }
}

/// State machine position: whether a stencil table is currently valid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Empty,
    Computed,
}

/// Builds, on demand, a nearest-projection [`StencilTable`] mapping
/// every vertex of one mesh onto the primitives of another, and
/// applies it to transfer field values in either direction.
///
/// Holds no reference to either mesh between calls: meshes are owned by
/// the enclosing application, not the mapping, so `input`/`output` are
/// passed to every operation that needs them.
pub struct NearestProjectionMapping {
    constraint: Constraint,
    dimension: u8,
    table: StencilTable,
    search_vertex_count: usize,
    state: State,
    event_sink: Box<dyn EventSink>,
}

impl NearestProjectionMapping {
    pub fn new(constraint: Constraint, dimension: u8) -> Self {
        assert!(dimension == 2 || dimension == 3);
        NearestProjectionMapping {
            constraint,
            dimension,
            table: StencilTable::default(),
            search_vertex_count: 0,
            state: State::Empty,
            event_sink: Box::new(NoopEventSink),
        }
    }

    pub fn with_event_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.event_sink = sink;
        self
    }

    pub fn constraint(&self) -> Constraint {
        self.constraint
    }

    pub fn has_computed_mapping(&self) -> bool {
        self.state == State::Computed
    }

    /// origins = the mesh whose vertices get a stencil; search = the
    /// mesh whose primitives those stencils reference.
    fn origins_and_search<'m>(&self, input: &'m Mesh, output: &'m Mesh) -> (&'m Mesh, &'m Mesh) {
        match self.constraint {
            Constraint::Consistent => (output, input),
            Constraint::Conservative => (input, output),
        }
    }

    /// Populates the stencil table, one stencil per origin vertex.
    ///
    /// `index_cache` is an ordinary `&mut` parameter rather than a
    /// field on `self` so that several mapping instances querying the
    /// same search mesh can share one cache instead of each rebuilding
    /// their own spatial index for it.
    ///
    /// Any fatal error leaves this instance in the same state it was
    /// in before the call failed to affect: the table and vertex count
    /// are only committed once the whole cascade has succeeded, so a
    /// failed `compute_mapping` on an already-`Computed` instance does
    /// not leave stale stencils in place as if they were still valid.
    pub fn compute_mapping(
        &mut self,
        input: &Mesh,
        output: &Mesh,
        index_cache: &mut IndexCache,
    ) -> MappingResult<()> {
        let (origins, search) = self.origins_and_search(input, output);
        assert_eq!(origins.dimension(), self.dimension);
        assert_eq!(search.dimension(), self.dimension);

        if search.vertex_count() == 0 && search.edge_count() == 0 && search.triangle_count() == 0
        {
            self.clear();
            return Err(MappingError::EmptySearchSpace);
        }

        self.event_sink.start("compute_mapping");

        if self.dimension == 3 && search.triangle_count() == 0 {
            log::warn!(
                "{}: search mesh has no triangles; nearest-projection mapping will fall back to edges/vertices",
                search.name()
            );
        } else if self.dimension == 2 && search.edge_count() == 0 {
            log::warn!(
                "{}: search mesh has no edges; nearest-projection mapping will fall back to vertices",
                search.name()
            );
        }

        let index = index_cache.get_or_build(search);
        let mut warn_guard = WarnGuard::default();
        let mut table = StencilTable::with_capacity(origins.vertex_count());

        for origin_id in origins.vertex_ids() {
            let q = origins.point(origin_id);

            let mut stencil = None;

            if self.dimension == 3 && index.has_triangles() {
                let mut ranked: Vec<(f64, Stencil)> = Vec::new();
                for tri_id in index.nearest_triangles(q, K_CANDIDATES) {
                    let t = search.triangle(tri_id);
                    let geom = GeomTriangle {
                        a: search.point(t.a),
                        b: search.point(t.b),
                        c: search.point(t.c),
                    };
                    let Some(proj) = geom.project(q) else {
                        warn_guard.degenerate_geometry(search.name());
                        continue;
                    };
                    let eps = eps_for_extent(geom.extent());
                    if proj.is_interior(eps) {
                        let (w0, w1, w2) = proj.weights;
                        ranked.push((
                            proj.plane_distance,
                            Stencil::new(vec![
                                InterpolationElement { vertex: t.a, mesh: search.handle(), weight: w0 },
                                InterpolationElement { vertex: t.b, mesh: search.handle(), weight: w1 },
                                InterpolationElement { vertex: t.c, mesh: search.handle(), weight: w2 },
                            ]),
                        ));
                    }
                }
                ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
                stencil = ranked.into_iter().next().map(|(_, s)| s);
            }

            if stencil.is_none() && index.has_edges() {
                let mut ranked: Vec<(f64, Stencil)> = Vec::new();
                for edge_id in index.nearest_edges(q, K_CANDIDATES) {
                    let e = search.edge(edge_id);
                    let geom = GeomEdge {
                        from: search.point(e.from),
                        to: search.point(e.to),
                    };
                    let Some(proj) = geom.project(q) else {
                        warn_guard.degenerate_geometry(search.name());
                        continue;
                    };
                    let eps = eps_for_extent(geom.length());
                    if proj.is_interior(eps) {
                        let (w0, w1) = proj.weights();
                        ranked.push((
                            proj.distance,
                            Stencil::new(vec![
                                InterpolationElement { vertex: e.from, mesh: search.handle(), weight: w0 },
                                InterpolationElement { vertex: e.to, mesh: search.handle(), weight: w1 },
                            ]),
                        ));
                    }
                }
                ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
                stencil = ranked.into_iter().next().map(|(_, s)| s);
            }

            if stencil.is_none() && index.has_vertices() {
                let nearest = index.nearest_vertices(q, 1);
                if let Some(&vertex) = nearest.first() {
                    stencil = Some(Stencil::new(vec![InterpolationElement {
                        vertex,
                        mesh: search.handle(),
                        weight: 1.0,
                    }]));
                }
            }

            let Some(stencil) = stencil else {
                self.event_sink.stop("compute_mapping");
                self.clear();
                return Err(MappingError::EmptySearchSpace);
            };
            table.push(stencil);
        }

        self.table = table;
        self.search_vertex_count = search.vertex_count();
        self.state = State::Computed;
        self.event_sink.stop("compute_mapping");
        Ok(())
    }

    /// Empties the stencil table and returns the instance to `Empty`.
    pub fn clear(&mut self) {
        self.table.clear();
        self.search_vertex_count = 0;
        self.state = State::Empty;
    }

    pub fn table(&self) -> &StencilTable {
        &self.table
    }

    /// Applies the stencil table to transfer a `components`-wide field
    /// from the search mesh's vertices to the origin mesh's vertices
    /// (`Consistent`) or the reverse (`Conservative`); see
    /// [`crate::transfer`].
    ///
    /// `source_values`/`target_values` are interpreted the same way as
    /// [`crate::transfer::map_consistent`]/[`crate::transfer::map_conservative`].
    pub fn map(
        &self,
        components: usize,
        source_values: &[f64],
        target_values: &mut [f64],
    ) -> MappingResult<()> {
        if self.state != State::Computed {
            return Err(MappingError::StaleStencils);
        }
        match self.constraint {
            Constraint::Consistent => crate::transfer::map_consistent(
                &self.table,
                self.search_vertex_count,
                components,
                source_values,
                target_values,
            ),
            Constraint::Conservative => crate::transfer::map_conservative(
                &self.table,
                self.search_vertex_count,
                components,
                source_values,
                target_values,
            ),
        }
    }

    /// Computes the mapping, tags every search-mesh vertex any stencil
    /// references, then clears the table again since the pass is
    /// speculative (a coupling scheme uses it to decide which vertices
    /// of a remote mesh it actually needs, before committing to a real
    /// exchange).
    ///
    /// Takes both meshes mutably, rather than a separate `mesh_to_tag`
    /// borrow, so the mesh this pass ends up mutating (input for
    /// `Consistent`, output for `Conservative` — the search mesh in
    /// both cases) can be the very mesh `compute_mapping` just read
    /// without a conflicting simultaneous borrow.
    pub fn tag_mesh_first_round(
        &mut self,
        input: &mut Mesh,
        output: &mut Mesh,
        index_cache: &mut IndexCache,
    ) -> MappingResult<()> {
        self.compute_mapping(input, output, index_cache)?;
        let mesh_to_tag: &mut Mesh = match self.constraint {
            Constraint::Consistent => input,
            Constraint::Conservative => output,
        };
        tag::apply_first_round_tags(&self.table, mesh_to_tag);
        self.clear();
        Ok(())
    }

    /// A no-op for this mapping flavour.
    pub fn tag_mesh_second_round(&mut self) {}
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
