//! dctmd-model
//!
//! DC/TMD examination model definitions. Pure data — the declarative
//! question tree, its primitive field descriptors, typed context
//! annotations, the structural value schema, and the builders that generate
//! the repeated per-side interview sub-trees.

pub mod builders;
pub mod context;
pub mod error;
pub mod instance;
pub mod node;
pub mod primitive;
pub mod schema;
pub mod vocab;

pub use context::{Context, ContextFilter, ContextTag};
pub use error::{ModelError, Result};
pub use instance::QuestionInstance;
pub use node::{GroupNode, ModelNode, QuestionNode, group, question, question_labeled};
pub use primitive::{EnableWhen, NO, Primitive, PrimitiveConfig, RenderKind, YES};
pub use schema::{SchemaIssue, ValueSchema};
pub use vocab::{PainType, Region, Side};
