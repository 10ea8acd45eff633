use serde::{Deserialize, Serialize};

use dctmd_model::{Region, Side};

/// A business-rule failure on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

/// Result of the field-level validation pass. Always covers every instance;
/// never short-circuits on the first failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// One region/side pair whose pain interview is not fully answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncompleteRegion {
    pub region: Region,
    pub side: Side,
    pub missing_pain: bool,
    pub missing_familiar_pain: bool,
    pub missing_familiar_headache: bool,
}

/// Result of the interview-completeness pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewReport {
    pub incomplete: Vec<IncompleteRegion>,
}

impl InterviewReport {
    pub fn is_complete(&self) -> bool {
        self.incomplete.is_empty()
    }
}
