use dctmd_model::QuestionInstance;

use crate::value::ValueSource;

/// The single conditional-visibility/required-ness primitive. An instance
/// without an `enable_when` rule is always enabled; otherwise it is enabled
/// iff the named same-level sibling currently equals the expected value.
/// Unset or differently-typed sibling values disable the field.
pub fn is_enabled(instance: &QuestionInstance, source: &impl ValueSource) -> bool {
    let Some(rule) = instance.enable_when() else {
        return true;
    };
    let sibling = instance.sibling_path(&rule.sibling);
    source.value(&sibling).as_str() == Some(rule.equals.as_str())
}
