//! dctmd-validate
//!
//! Runtime validation over collected examination data: the per-field rule
//! checker, the region/side interview-completeness checker, and the
//! conditional-enablement primitive shared with the rendering layer.

mod enablement;
mod engine;
mod interview;
mod report;
mod value;

pub use enablement::is_enabled;
pub use engine::{TERMINATED_KEY, validate_fields};
pub use interview::validate_interview_completion;
pub use report::{FieldError, IncompleteRegion, InterviewReport, ValidationReport};
pub use value::{ValueSource, is_empty_value, map_source};
