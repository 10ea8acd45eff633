use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::primitive::{NO, YES};

/// Structural validation schema, isomorphic to the model tree shape.
/// Checks value shape and type only; required-ness and numeric ranges are
/// business rules and live in the validation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSchema {
    Checkbox,
    YesNo,
    Measurement,
    Choice(Vec<String>),
    MultiSelect(Vec<String>),
    Record(IndexMap<String, ValueSchema>),
}

/// A structural mismatch between a value tree and its schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaIssue {
    pub path: String,
    pub message: String,
}

impl ValueSchema {
    /// Check a value tree against this schema, returning every structural
    /// mismatch found. An empty result means the value conforms.
    pub fn check(&self, value: &Value) -> Vec<SchemaIssue> {
        let mut issues = Vec::new();
        self.check_at("", value, &mut issues);
        issues
    }

    fn check_at(&self, path: &str, value: &Value, issues: &mut Vec<SchemaIssue>) {
        match self {
            ValueSchema::Checkbox => {
                if !value.is_boolean() {
                    push(issues, path, "expected a boolean");
                }
            }
            ValueSchema::YesNo => match value {
                Value::Null => {}
                Value::String(s) if s == YES || s == NO => {}
                _ => push(issues, path, "expected \"yes\", \"no\" or null"),
            },
            ValueSchema::Measurement => {
                if !(value.is_null() || value.is_number()) {
                    push(issues, path, "expected a number or null");
                }
            }
            ValueSchema::Choice(options) => match value {
                Value::Null => {}
                Value::String(s) if options.iter().any(|o| o == s) => {}
                _ => push(issues, path, "expected one of the configured options or null"),
            },
            ValueSchema::MultiSelect(options) => match value {
                Value::Array(items) => {
                    for item in items {
                        let ok = matches!(item, Value::String(s) if options.iter().any(|o| o == s));
                        if !ok {
                            push(issues, path, "expected an array of configured options");
                            break;
                        }
                    }
                }
                _ => push(issues, path, "expected an array"),
            },
            ValueSchema::Record(fields) => match value {
                Value::Object(map) => {
                    for (key, field_schema) in fields {
                        match map.get(key) {
                            Some(field_value) => {
                                field_schema.check_at(&join(path, key), field_value, issues);
                            }
                            None => push(issues, &join(path, key), "missing field"),
                        }
                    }
                    for key in map.keys() {
                        if !fields.contains_key(key) {
                            push(issues, &join(path, key), "unknown field");
                        }
                    }
                }
                _ => push(issues, path, "expected an object"),
            },
        }
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn push(issues: &mut Vec<SchemaIssue>, path: &str, message: &str) {
    issues.push(SchemaIssue {
        path: path.to_string(),
        message: message.to_string(),
    });
}
