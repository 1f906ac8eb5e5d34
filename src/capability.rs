//! The capability set the enclosing application treats mapping
//! instances polymorphically over: `compute_mapping`, `clear`,
//! `has_computed_mapping`, `map`, `tag_mesh_first_round`,
//! `tag_mesh_second_round`, declared requirements.
//!
//! `NearestProjectionMapping` is the only variant this core ships, so
//! the trait is a thin interface-abstraction layer rather than a deep
//! inheritance hierarchy — future mapping flavours (e.g. a
//! radial-basis-function mapping) would implement the same trait
//! without the enclosing coupling scheme needing to know which one it
//! holds.

use projmap_engine::{Constraint, MappingResult, MeshRequirements, NearestProjectionMapping};
use projmap_index::IndexCache;
use projmap_mesh::Mesh;

/// Operations any mapping variant must expose to be usable
/// polymorphically by the enclosing coupling scheme.
pub trait Mapping {
    fn compute_mapping(
        &mut self,
        input: &Mesh,
        output: &Mesh,
        index_cache: &mut IndexCache,
    ) -> MappingResult<()>;
    fn clear(&mut self);
    fn has_computed_mapping(&self) -> bool;
    fn map(&self, components: usize, source: &[f64], target: &mut [f64]) -> MappingResult<()>;
    fn tag_mesh_first_round(
        &mut self,
        input: &mut Mesh,
        output: &mut Mesh,
        index_cache: &mut IndexCache,
    ) -> MappingResult<()>;
    fn tag_mesh_second_round(&mut self);
    fn declared_requirements(&self) -> MeshRequirements;
}

impl Mapping for NearestProjectionMapping {
    fn compute_mapping(
        &mut self,
        input: &Mesh,
        output: &Mesh,
        index_cache: &mut IndexCache,
    ) -> MappingResult<()> {
        NearestProjectionMapping::compute_mapping(self, input, output, index_cache)
    }

    fn clear(&mut self) {
        NearestProjectionMapping::clear(self)
    }

    fn has_computed_mapping(&self) -> bool {
        NearestProjectionMapping::has_computed_mapping(self)
    }

    fn map(&self, components: usize, source: &[f64], target: &mut [f64]) -> MappingResult<()> {
        NearestProjectionMapping::map(self, components, source, target)
    }

    fn tag_mesh_first_round(
        &mut self,
        input: &mut Mesh,
        output: &mut Mesh,
        index_cache: &mut IndexCache,
    ) -> MappingResult<()> {
        NearestProjectionMapping::tag_mesh_first_round(self, input, output, index_cache)
    }

    fn tag_mesh_second_round(&mut self) {
        NearestProjectionMapping::tag_mesh_second_round(self)
    }

    fn declared_requirements(&self) -> MeshRequirements {
        Constraint::declared_requirements(self.constraint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projmap_geom::point3;

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new("search", 2);
        let a = mesh.push_vertex(point3(0.0, 0.0, 0.0));
        let b = mesh.push_vertex(point3(1.0, 0.0, 0.0));
        let c = mesh.push_vertex(point3(0.0, 1.0, 0.0));
        mesh.push_triangle(a, b, c);
        mesh
    }

    #[test]
    fn used_through_the_trait_object() {
        let input = triangle_mesh();
        let mut output = Mesh::new("origins", 2);
        output.push_vertex(point3(0.1, 0.1, 0.0));
        let mut cache = IndexCache::new();

        let mut mapping: Box<dyn Mapping> =
            Box::new(NearestProjectionMapping::new(Constraint::Consistent, 2));
        mapping.compute_mapping(&input, &output, &mut cache).unwrap();
        assert!(mapping.has_computed_mapping());

        let source = [10.0, 20.0, 30.0];
        let mut target = [0.0];
        mapping.map(1, &source, &mut target).unwrap();
        assert!(target[0] > 0.0);
    }
}
