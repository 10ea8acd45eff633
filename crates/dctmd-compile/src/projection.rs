//! The three isomorphic projections of the model tree.
//!
//! Each is a pure recursive lowering: the schema projection mirrors the tree
//! as a structural record schema, the instance projection flattens it into
//! an ordered list of addressable questions, and the defaults projection
//! produces the value tree that seeds the external form-state container.

use serde_json::Value;

use dctmd_model::{Context, ModelNode, QuestionInstance, ValueSchema};

/// Lower the tree into its structural validation schema: a question becomes
/// its primitive's fragment, a group becomes a record with the same key set.
pub fn compile_schema(node: &ModelNode) -> ValueSchema {
    match node {
        ModelNode::Question(q) => q.primitive.schema(),
        ModelNode::Group(g) => ValueSchema::Record(
            g.children
                .iter()
                .map(|(key, child)| (key.clone(), compile_schema(child)))
                .collect(),
        ),
    }
}

/// Flatten the tree into its ordered instance list. Paths are dotted storage
/// keys accumulated from the root key down; context accumulates from the
/// annotations encountered on the walk. Paths are globally unique because
/// every recursive call appends a distinct child key.
pub fn compile_instances(root_key: &str, node: &ModelNode) -> Vec<QuestionInstance> {
    let mut out = Vec::new();
    collect(root_key, node, "", Context::default(), &mut out);
    out
}

fn collect(
    key: &str,
    node: &ModelNode,
    parent_path: &str,
    context: Context,
    out: &mut Vec<QuestionInstance>,
) {
    let context = match node.tag() {
        Some(tag) => context.with(tag),
        None => context,
    };
    let path = if parent_path.is_empty() {
        key.to_string()
    } else {
        format!("{parent_path}.{key}")
    };
    match node {
        ModelNode::Question(q) => out.push(QuestionInstance {
            path,
            render_kind: q.primitive.kind,
            context,
            config: q.primitive.config.clone(),
            label_key: q.label_key.clone(),
        }),
        ModelNode::Group(g) => {
            for (child_key, child) in &g.children {
                collect(child_key, child, &path, context, out);
            }
        }
    }
}

/// Produce the default value tree mirroring the model shape. Always
/// validates cleanly against `compile_schema` of the same tree.
pub fn compile_defaults(node: &ModelNode) -> Value {
    match node {
        ModelNode::Question(q) => q.primitive.default_value(),
        ModelNode::Group(g) => Value::Object(
            g.children
                .iter()
                .map(|(key, child)| (key.clone(), compile_defaults(child)))
                .collect(),
        ),
    }
}
