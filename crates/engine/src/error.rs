//! Error taxonomy for the mapping engine.
//!
//! Hand-rolled enums with manual `Display`/`std::error::Error` rather
//! than pulling in `thiserror` for a handful of variants.

use std::fmt;

/// Fatal errors. Degenerate geometry (a zero-area triangle or
/// zero-length edge encountered mid-cascade) is deliberately *not* a
/// variant here — it is a local recovery, logged at `WARN` and folded
/// into the cascade's fallthrough, never returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MappingError {
    /// The search mesh has zero primitives of every dimension.
    EmptySearchSpace,
    /// `map`'s input/output field component counts disagree.
    DimensionMismatch { expected: usize, found: usize },
    /// `map` was called before `compute_mapping` populated the stencils.
    StaleStencils,
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingError::EmptySearchSpace => {
                write!(f, "search mesh has no vertices, edges or triangles to project onto")
            }
            MappingError::DimensionMismatch { expected, found } => {
                write!(f, "field component count mismatch: expected {expected}, found {found}")
            }
            MappingError::StaleStencils => {
                write!(f, "map called before compute_mapping populated the stencil table")
            }
        }
    }
}

impl std::error::Error for MappingError {}

pub type MappingResult<T> = Result<T, MappingError>;
