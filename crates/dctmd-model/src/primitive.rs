use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::schema::ValueSchema;

/// Submission value for an affirmative yes/no answer.
pub const YES: &str = "yes";
/// Submission value for a negative yes/no answer.
pub const NO: &str = "no";

/// How a leaf field is rendered and which value shape it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderKind {
    /// Plain boolean toggle (e.g. "measurement aborted").
    Checkbox,
    /// Yes/no interview question; value is `"yes"`, `"no"` or null.
    YesNo,
    /// Numeric measurement in millimetres; value is a number or null.
    Measurement,
    /// Single selection from a closed option list, or null.
    Choice,
    /// Multiple selections from a closed option list.
    MultiSelect,
}

/// Conditional-enablement rule: the field is enabled iff the named sibling
/// (same group, different key) currently equals `equals`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnableWhen {
    pub sibling: String,
    pub equals: String,
}

/// Configuration bag attached to a primitive. Stored verbatim; nothing is
/// validated at construction time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveConfig {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub options: Option<Vec<String>>,
    pub enable_when: Option<EnableWhen>,
}

/// A leaf field definition: render kind plus configuration. Each kind fixes
/// its own default value and structural schema fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub kind: RenderKind,
    pub config: PrimitiveConfig,
}

impl Primitive {
    pub fn new(kind: RenderKind, config: PrimitiveConfig) -> Self {
        Self { kind, config }
    }

    pub fn checkbox() -> Self {
        Self::new(RenderKind::Checkbox, PrimitiveConfig::default())
    }

    pub fn yes_no() -> Self {
        Self::new(RenderKind::YesNo, PrimitiveConfig::default())
    }

    pub fn measurement() -> Self {
        Self::new(RenderKind::Measurement, PrimitiveConfig::default())
    }

    pub fn choice<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            RenderKind::Choice,
            PrimitiveConfig {
                options: Some(options.into_iter().map(Into::into).collect()),
                ..PrimitiveConfig::default()
            },
        )
    }

    pub fn multi_select<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            RenderKind::MultiSelect,
            PrimitiveConfig {
                options: Some(options.into_iter().map(Into::into).collect()),
                ..PrimitiveConfig::default()
            },
        )
    }

    pub fn required(mut self) -> Self {
        self.config.required = true;
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.config.min = Some(min);
        self.config.max = Some(max);
        self
    }

    pub fn with_enable_when(mut self, sibling: impl Into<String>, equals: impl Into<String>) -> Self {
        self.config.enable_when = Some(EnableWhen {
            sibling: sibling.into(),
            equals: equals.into(),
        });
        self
    }

    /// The seed value for this kind: `false`, `null`, `null`, `null`, `[]`.
    pub fn default_value(&self) -> Value {
        match self.kind {
            RenderKind::Checkbox => json!(false),
            RenderKind::YesNo | RenderKind::Measurement | RenderKind::Choice => Value::Null,
            RenderKind::MultiSelect => json!([]),
        }
    }

    /// The structural schema fragment for this kind.
    pub fn schema(&self) -> ValueSchema {
        match self.kind {
            RenderKind::Checkbox => ValueSchema::Checkbox,
            RenderKind::YesNo => ValueSchema::YesNo,
            RenderKind::Measurement => ValueSchema::Measurement,
            RenderKind::Choice => ValueSchema::Choice(self.config.options.clone().unwrap_or_default()),
            RenderKind::MultiSelect => {
                ValueSchema::MultiSelect(self.config.options.clone().unwrap_or_default())
            }
        }
    }
}
