use crate::error::LayoutError;
use crate::template::BindingRule;
use ahash::AHashMap;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// The runtime values supplied to a wiring call, keyed by input variable name.
pub type ValuesMap = AHashMap<String, Value>;

/// Read-only access to runtime values by input variable name.
pub trait ValueLookup {
    fn lookup(&self, name: &str) -> Option<&Value>;
}

impl ValueLookup for AHashMap<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl ValueLookup for HashMap<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl ValueLookup for Map<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Parses a JSON object of runtime values.
pub fn values_from_str(text: &str) -> Result<ValuesMap, LayoutError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(object) => Ok(object.into_iter().collect()),
        other => Err(LayoutError::InvalidTemplate(format!(
            "values must be a JSON object, found {}",
            json_type_name(&other)
        ))),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(super) enum Resolution<'a> {
    Resolved(&'a Value),
    /// Optional rule with nothing to write; targets stay as authored.
    Unbound,
    MissingRequired,
}

/// Supplied value first, then the rule's default, then the rule's requiredness.
pub(super) fn resolve<'a, V>(rule: &'a BindingRule, values: &'a V) -> Resolution<'a>
where
    V: ValueLookup + ?Sized,
{
    if let Some(value) = values.lookup(&rule.name) {
        return Resolution::Resolved(value);
    }
    match (&rule.default_value, rule.is_required) {
        (Some(default), _) => Resolution::Resolved(default),
        (None, true) => Resolution::MissingRequired,
        (None, false) => Resolution::Unbound,
    }
}
