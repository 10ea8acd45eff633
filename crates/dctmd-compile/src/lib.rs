//! dctmd-compile
//!
//! Compiles the declarative examination model into its runtime projections:
//! the structural schema, the flat addressable instance list, and the
//! default value tree, wrapped in a read-only [`CompiledExam`] registry with
//! path-helper queries and step resolution.

mod projection;
mod registry;
mod step;

pub use projection::{compile_defaults, compile_instances, compile_schema};
pub use registry::CompiledExam;
pub use step::StepDef;
