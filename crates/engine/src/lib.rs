//! Mapping engine: the interpolation-element/stencil store, the
//! `NearestProjectionMapping` state machine that drives the
//! triangle/edge/vertex projection cascade, field transfer across a
//! computed mapping, and the tagging pass used to discover which
//! vertices a mapping actually touches.

mod constraint;
mod engine;
mod error;
mod sink;
mod stencil;
mod tag;
mod transfer;

pub use constraint::{Constraint, MeshRequirements, RequirementKind};
pub use engine::{NearestProjectionMapping, K_CANDIDATES};
pub use error::{MappingError, MappingResult};
pub use sink::{EventSink, NoopEventSink};
pub use stencil::{InterpolationElement, Stencil, StencilTable, WEIGHT_SUM_EPS};
pub use tag::apply_first_round_tags;
pub use transfer::{map_conservative, map_consistent};
