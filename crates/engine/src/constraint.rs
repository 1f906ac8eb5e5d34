//! Direction of field transfer, and the mesh shape each direction
//! requires.

/// *consistent* interpolates a state field from input to output;
/// *conservative* applies the adjoint of a consistent map, preserving
/// integrals.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Constraint {
    Consistent,
    Conservative,
}

/// Whether a mesh needs its full primitive set (vertices, edges,
/// triangles) or only its vertices, for a given role in a mapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RequirementKind {
    Full,
    VertexOnly,
}

/// What the enclosing system should request from remote participants
/// for the input and output meshes, given a [`Constraint`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MeshRequirements {
    pub input: RequirementKind,
    pub output: RequirementKind,
}

impl Constraint {
    /// Consistent needs the full primitive set on input and only
    /// vertices on output; conservative is the mirror image of that.
    pub fn declared_requirements(self) -> MeshRequirements {
        match self {
            Constraint::Consistent => MeshRequirements {
                input: RequirementKind::Full,
                output: RequirementKind::VertexOnly,
            },
            Constraint::Conservative => MeshRequirements {
                input: RequirementKind::VertexOnly,
                output: RequirementKind::Full,
            },
        }
    }
}
