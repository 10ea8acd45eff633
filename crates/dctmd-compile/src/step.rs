//! Step definitions and their resolution against the compiled instance list.

use serde::{Deserialize, Serialize};

use crate::registry::CompiledExam;

/// How a named wizard step maps to instance paths. Paths and prefixes are
/// given relative to the compiled root key; resolution prepends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDef {
    /// An explicit list of relative paths.
    Explicit(Vec<String>),
    /// Every per-side interview instance under the given relative prefix.
    /// Instances without a side context (e.g. a bare measurement leaf
    /// sharing the prefix) are excluded.
    Prefix(String),
}

impl StepDef {
    pub fn explicit<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StepDef::Explicit(paths.into_iter().map(Into::into).collect())
    }

    pub fn prefix(prefix: impl Into<String>) -> Self {
        StepDef::Prefix(prefix.into())
    }
}

impl CompiledExam {
    /// Resolve a step definition to full instance paths, in instance-list
    /// (tree traversal) order for prefix steps.
    pub fn resolve_step(&self, step: &StepDef) -> Vec<String> {
        match step {
            StepDef::Explicit(paths) => paths
                .iter()
                .map(|path| format!("{}.{path}", self.root_key()))
                .collect(),
            StepDef::Prefix(prefix) => {
                let full_prefix = format!("{}.{prefix}", self.root_key());
                self.by_prefix(&full_prefix)
                    .into_iter()
                    .filter(|instance| instance.context.side.is_some())
                    .map(|instance| instance.path.clone())
                    .collect()
            }
        }
    }
}
