//! Field-level validation pass.
//!
//! Walks every compiled instance in order, skips disabled fields, and
//! accumulates structured errors. Business-rule failures are returned as
//! data, never thrown, and the pass never short-circuits so callers can
//! surface all problems at once.

use serde_json::Value;

use dctmd_compile::CompiledExam;
use dctmd_model::{QuestionInstance, RenderKind};

use crate::enablement::is_enabled;
use crate::report::{FieldError, ValidationReport};
use crate::value::{ValueSource, is_empty_value};

/// Sibling key marking a measurement as aborted before completion.
pub const TERMINATED_KEY: &str = "terminated";

const MIN_DEFAULT: f64 = 0.0;
const MAX_DEFAULT: f64 = 100.0;

/// Validate every instance of the compiled exam against the current values.
pub fn validate_fields(exam: &CompiledExam, source: &impl ValueSource) -> ValidationReport {
    let mut errors = Vec::new();
    for instance in exam.all() {
        if !is_enabled(instance, source) {
            continue;
        }
        let value = source.value(&instance.path);
        let error = match instance.render_kind {
            RenderKind::Measurement => check_measurement(exam, instance, source, &value),
            _ => check_required(instance, &value),
        };
        errors.extend(error);
    }
    ValidationReport { errors }
}

fn check_measurement(
    exam: &CompiledExam,
    instance: &QuestionInstance,
    source: &impl ValueSource,
    value: &Value,
) -> Option<FieldError> {
    if is_empty_value(value) {
        if !instance.config.required {
            return None;
        }
        let terminated = instance.sibling_path(TERMINATED_KEY);
        if exam.has(&terminated) {
            // An aborted measurement counts as answered.
            if source.value(&terminated) == Value::Bool(true) {
                return None;
            }
            return Some(field_error(
                instance,
                "Enter a value or mark the measurement as aborted.",
            ));
        }
        return Some(field_error(instance, "Enter a value."));
    }

    // Non-numeric non-empty values are a structural problem, covered by the
    // schema projection rather than this pass.
    let number = value.as_f64()?;
    let min = instance.config.min.unwrap_or(MIN_DEFAULT);
    let max = instance.config.max.unwrap_or(MAX_DEFAULT);
    if number < min {
        return Some(field_error(instance, &format!("Minimum: {min}")));
    }
    if number > max {
        return Some(field_error(instance, &format!("Maximum: {max}")));
    }
    None
}

fn check_required(instance: &QuestionInstance, value: &Value) -> Option<FieldError> {
    if instance.config.required && is_empty_value(value) {
        return Some(field_error(instance, "This field is required."));
    }
    None
}

fn field_error(instance: &QuestionInstance, message: &str) -> FieldError {
    FieldError {
        path: instance.path.clone(),
        message: message.to_string(),
    }
}
