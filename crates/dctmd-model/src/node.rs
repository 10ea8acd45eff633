use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::context::ContextTag;
use crate::primitive::Primitive;

/// The declarative examination AST: a question node wraps one primitive,
/// a group node is a named, ordered collection of child nodes. Insertion
/// order of group children defines traversal order and therefore the order
/// of the compiled instance list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModelNode {
    Question(QuestionNode),
    Group(GroupNode),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionNode {
    pub primitive: Primitive,
    pub label_key: Option<String>,
    pub tag: Option<ContextTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    pub children: IndexMap<String, ModelNode>,
    pub tag: Option<ContextTag>,
}

/// Wrap a primitive in a question node.
pub fn question(primitive: Primitive) -> ModelNode {
    ModelNode::Question(QuestionNode {
        primitive,
        label_key: None,
        tag: None,
    })
}

/// Wrap a primitive in a question node carrying a translation label key.
pub fn question_labeled(primitive: Primitive, label_key: impl Into<String>) -> ModelNode {
    ModelNode::Question(QuestionNode {
        primitive,
        label_key: Some(label_key.into()),
        tag: None,
    })
}

/// Build a group node from ordered `(key, child)` pairs. Duplicate keys keep
/// the last entry, per map semantics.
pub fn group<K, I>(children: I) -> GroupNode
where
    K: Into<String>,
    I: IntoIterator<Item = (K, ModelNode)>,
{
    GroupNode {
        children: children
            .into_iter()
            .map(|(key, node)| (key.into(), node))
            .collect(),
        tag: None,
    }
}

impl ModelNode {
    /// Attach a context annotation to this node.
    pub fn tagged(self, tag: ContextTag) -> Self {
        match self {
            ModelNode::Question(mut q) => {
                q.tag = Some(tag);
                ModelNode::Question(q)
            }
            ModelNode::Group(mut g) => {
                g.tag = Some(tag);
                ModelNode::Group(g)
            }
        }
    }

    pub fn tag(&self) -> Option<ContextTag> {
        match self {
            ModelNode::Question(q) => q.tag,
            ModelNode::Group(g) => g.tag,
        }
    }

    /// Number of question leaves in this subtree.
    pub fn question_count(&self) -> usize {
        match self {
            ModelNode::Question(_) => 1,
            ModelNode::Group(g) => g.children.values().map(Self::question_count).sum(),
        }
    }
}

impl GroupNode {
    /// Spread helper: re-expose this group's children so they can be merged
    /// with sibling fields without re-nesting.
    pub fn into_children(self) -> IndexMap<String, ModelNode> {
        self.children
    }

    pub fn insert(&mut self, key: impl Into<String>, node: ModelNode) {
        self.children.insert(key.into(), node);
    }
}

impl From<GroupNode> for ModelNode {
    fn from(group: GroupNode) -> Self {
        ModelNode::Group(group)
    }
}
