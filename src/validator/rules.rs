use super::formatter::check_formatters;
use crate::layout::ComponentKind;
use serde_json::{Map, Value};
use std::fmt;

/// Position of a node in a layout tree, rendered as `root.children[0].options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath(String);

impl NodePath {
    pub fn root() -> Self {
        NodePath("root".to_string())
    }

    pub fn child(&self, index: usize) -> Self {
        NodePath(format!("{}.children[{}]", self.0, index))
    }

    pub fn field(&self, key: &str) -> Self {
        NodePath(format!("{}.{}", self.0, key))
    }

    pub fn index(&self, index: usize) -> Self {
        NodePath(format!("{}[{}]", self.0, index))
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accumulates errors and warnings during one validation pass.
#[derive(Debug, Default)]
pub struct Findings {
    pub(super) errors: Vec<String>,
    pub(super) warnings: Vec<String>,
}

impl Findings {
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

/// A component-specific check, run on every component whose kind it applies to.
pub trait ComponentRule: Send + Sync {
    fn rule_name(&self) -> &str;
    fn applies_to(&self, kind: &ComponentKind) -> bool;
    fn check(&self, component: &Map<String, Value>, path: &NodePath, findings: &mut Findings);
}

/// A chart with no (or empty) `options` renders as an empty box.
pub struct ChartOptionsRule;

impl ComponentRule for ChartOptionsRule {
    fn rule_name(&self) -> &str {
        "chart-options"
    }

    fn applies_to(&self, kind: &ComponentKind) -> bool {
        *kind == ComponentKind::HighchartsChart
    }

    fn check(&self, component: &Map<String, Value>, path: &NodePath, findings: &mut Findings) {
        if is_blank(component.get("options")) {
            findings.warning(format!(
                "HighchartsChart at {} missing 'options' property",
                path
            ));
        }
    }
}

/// Chart formatters must be template strings, not script.
pub struct FormatterRule;

impl ComponentRule for FormatterRule {
    fn rule_name(&self) -> &str {
        "chart-formatters"
    }

    fn applies_to(&self, kind: &ComponentKind) -> bool {
        *kind == ComponentKind::HighchartsChart
    }

    fn check(&self, component: &Map<String, Value>, path: &NodePath, findings: &mut Findings) {
        if let Some(options) = component.get("options") {
            check_formatters(options, &path.field("options"), findings);
        }
    }
}

/// A table needs both its column descriptors and its rows.
pub struct TablePayloadRule;

impl ComponentRule for TablePayloadRule {
    fn rule_name(&self) -> &str {
        "table-payload"
    }

    fn applies_to(&self, kind: &ComponentKind) -> bool {
        *kind == ComponentKind::DataTable
    }

    fn check(&self, component: &Map<String, Value>, path: &NodePath, findings: &mut Findings) {
        for field in ["columns", "data"] {
            if !component.contains_key(field) {
                findings.warning(format!("DataTable at {} missing '{}' property", path, field));
            }
        }
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Object(object)) => object.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}

pub(super) fn default_rules() -> Vec<Box<dyn ComponentRule>> {
    vec![
        Box::new(ChartOptionsRule),
        Box::new(FormatterRule),
        Box::new(TablePayloadRule),
    ]
}
