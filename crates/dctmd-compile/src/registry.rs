//! The compiled examination registry.
//!
//! `CompiledExam` is built once by an explicit initialization call and then
//! treated as read-only; consumers receive it by reference. All query
//! methods are pure and synchronous.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use dctmd_model::{
    ContextFilter, ModelError, ModelNode, QuestionInstance, Region, RenderKind, Result, Side,
    ValueSchema,
};

use crate::projection::{compile_defaults, compile_instances, compile_schema};

/// The model tree lowered into its three projections, plus a path index.
/// Immutable after construction; freely shareable across consumers.
#[derive(Debug, Clone)]
pub struct CompiledExam {
    root_key: String,
    instances: Vec<QuestionInstance>,
    index: HashMap<String, usize>,
    defaults: Value,
    schema: ValueSchema,
}

impl CompiledExam {
    /// Compile a model tree under the given root key.
    pub fn compile(root_key: impl Into<String>, model: &ModelNode) -> Self {
        let root_key = root_key.into();
        let instances = compile_instances(&root_key, model);
        let index = instances
            .iter()
            .enumerate()
            .map(|(idx, instance)| (instance.path.clone(), idx))
            .collect();
        let defaults = compile_defaults(model);
        let schema = compile_schema(model);
        debug!(
            root_key = %root_key,
            instances = instances.len(),
            "compiled examination model"
        );
        Self {
            root_key,
            instances,
            index,
            defaults,
            schema,
        }
    }

    pub fn root_key(&self) -> &str {
        &self.root_key
    }

    /// Every compiled instance, in tree traversal order.
    pub fn all(&self) -> &[QuestionInstance] {
        &self.instances
    }

    /// Look up an instance by its full path. An unknown path is a
    /// model/consumer mismatch and fails fast with `ModelError::UnknownPath`.
    pub fn get(&self, path: &str) -> Result<&QuestionInstance> {
        self.index
            .get(path)
            .map(|&idx| &self.instances[idx])
            .ok_or_else(|| ModelError::UnknownPath(path.to_string()))
    }

    pub fn has(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// Instances whose path equals the prefix or sits below it (segment-wise,
    /// so `a.b` does not match `a.bc.d`).
    pub fn by_prefix(&self, prefix: &str) -> Vec<&QuestionInstance> {
        self.instances
            .iter()
            .filter(|instance| under_prefix(&instance.path, prefix))
            .collect()
    }

    /// Instances whose context matches every populated slot of the filter.
    pub fn by_context(&self, filter: &ContextFilter) -> Vec<&QuestionInstance> {
        self.instances
            .iter()
            .filter(|instance| filter.matches(&instance.context))
            .collect()
    }

    pub fn by_side(&self, side: Side) -> Vec<&QuestionInstance> {
        self.by_context(&ContextFilter::side(side))
    }

    pub fn by_region(&self, region: Region) -> Vec<&QuestionInstance> {
        self.by_context(&ContextFilter::region(region))
    }

    pub fn by_kind(&self, kind: RenderKind) -> Vec<&QuestionInstance> {
        self.instances
            .iter()
            .filter(|instance| instance.render_kind == kind)
            .collect()
    }

    pub fn measurements(&self) -> Vec<&QuestionInstance> {
        self.by_kind(RenderKind::Measurement)
    }

    pub fn yes_no_questions(&self) -> Vec<&QuestionInstance> {
        self.by_kind(RenderKind::YesNo)
    }

    /// Per-side interview questions (side and pain-type context both
    /// present), optionally restricted to a path prefix.
    pub fn interview_questions(&self, section_prefix: Option<&str>) -> Vec<&QuestionInstance> {
        self.instances
            .iter()
            .filter(|instance| instance.is_interview())
            .filter(|instance| {
                section_prefix.is_none_or(|prefix| under_prefix(&instance.path, prefix))
            })
            .collect()
    }

    /// The default value tree seeding the external form-state container.
    pub fn defaults(&self) -> &Value {
        &self.defaults
    }

    /// The structural validation schema for the whole tree.
    pub fn schema(&self) -> &ValueSchema {
        &self.schema
    }
}

pub(crate) fn under_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some("") => true,
        Some(rest) => rest.starts_with('.'),
        None => false,
    }
}
