use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::primitive::{EnableWhen, PrimitiveConfig, RenderKind};

/// One compiled, individually addressable question occurrence. Created once
/// per compilation pass and immutable afterwards; identified by `path`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionInstance {
    /// Globally unique dotted storage key within one compiled tree.
    pub path: String,
    pub render_kind: RenderKind,
    /// Context accumulated from the annotations on the walk down to this leaf.
    pub context: Context,
    pub config: PrimitiveConfig,
    pub label_key: Option<String>,
}

impl QuestionInstance {
    /// The conditional-enablement rule, if the primitive carries one.
    pub fn enable_when(&self) -> Option<&EnableWhen> {
        self.config.enable_when.as_ref()
    }

    /// The final path segment (the question's own key).
    pub fn key(&self) -> &str {
        match self.path.rfind('.') {
            Some(idx) => &self.path[idx + 1..],
            None => &self.path,
        }
    }

    /// The path of a same-level sibling: the final segment replaced by `key`.
    pub fn sibling_path(&self, key: &str) -> String {
        match self.path.rfind('.') {
            Some(idx) => format!("{}.{key}", &self.path[..idx]),
            None => key.to_string(),
        }
    }

    /// Whether this is a per-side interview question (carries both a side
    /// and a pain-type context).
    pub fn is_interview(&self) -> bool {
        self.context.side.is_some() && self.context.pain_type.is_some()
    }
}
