use crate::binder::json_type_name;
use crate::layout::{ComponentKind, component_names};
use crate::template::LayoutTemplate;
use crate::visualization::Visualization;
use ahash::AHashSet;
use itertools::Itertools;
use serde_json::{Map, Value};

mod formatter;
mod rules;

pub use rules::{
    ChartOptionsRule, ComponentRule, Findings, FormatterRule, NodePath, TablePayloadRule,
};

const DEFAULT_ROOT_TYPE: &str = "Document";
const DEFAULT_ROOT_PROPERTIES: [&str; 7] = [
    "type",
    "rows",
    "columns",
    "rowHeight",
    "colWidth",
    "gap",
    "children",
];

/// The outcome of validating a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// `true` iff `errors` is empty.
    pub success: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn from_findings(findings: Findings) -> Self {
        Self {
            success: findings.errors.is_empty(),
            errors: findings.errors,
            warnings: findings.warnings,
        }
    }
}

/// A layout to validate: raw JSON text or an already parsed tree.
#[derive(Debug, Clone, Copy)]
pub enum LayoutSource<'a> {
    Text(&'a str),
    Tree(&'a Value),
}

impl<'a> From<&'a str> for LayoutSource<'a> {
    fn from(text: &'a str) -> Self {
        LayoutSource::Text(text)
    }
}

impl<'a> From<&'a String> for LayoutSource<'a> {
    fn from(text: &'a String) -> Self {
        LayoutSource::Text(text.as_str())
    }
}

impl<'a> From<&'a Value> for LayoutSource<'a> {
    fn from(tree: &'a Value) -> Self {
        LayoutSource::Tree(tree)
    }
}

pub struct ValidatorBuilder {
    root_type: String,
    required_root_properties: Vec<String>,
    rules: Vec<Box<dyn ComponentRule>>,
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self {
            root_type: DEFAULT_ROOT_TYPE.to_string(),
            required_root_properties: DEFAULT_ROOT_PROPERTIES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            rules: rules::default_rules(),
        }
    }
}

impl ValidatorBuilder {
    pub fn with_root_type(mut self, root_type: &str) -> Self {
        self.root_type = root_type.to_string();
        self
    }

    pub fn with_required_root_properties(mut self, properties: &[&str]) -> Self {
        self.required_root_properties = properties.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_rule(mut self, rule: Box<dyn ComponentRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn without_default_rules(mut self) -> Self {
        self.rules.clear();
        self
    }

    pub fn build(self) -> Validator {
        Validator {
            root_type: self.root_type,
            required_root_properties: self.required_root_properties,
            rules: self.rules,
        }
    }
}

/// Checks layout trees for structural defects before they reach a renderer.
///
/// Validation never stops at the first problem: every defect in the tree is
/// collected in one pass. Only unparseable text short-circuits.
pub struct Validator {
    root_type: String,
    required_root_properties: Vec<String>,
    rules: Vec<Box<dyn ComponentRule>>,
}

impl Default for Validator {
    fn default() -> Self {
        ValidatorBuilder::default().build()
    }
}

impl Validator {
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    pub fn validate<'a>(&self, source: impl Into<LayoutSource<'a>>) -> ValidationResult {
        let mut findings = Findings::default();
        match source.into() {
            LayoutSource::Text(text) => match serde_json::from_str::<Value>(text) {
                Ok(tree) => self.check_layout(&tree, text, &mut findings),
                Err(e) => findings.error(format!("Invalid JSON in layout: {}", e)),
            },
            LayoutSource::Tree(tree) => {
                // A `Value` always has string keys, so serializing it cannot fail.
                let text = serde_json::to_string(tree).unwrap_or_default();
                self.check_layout(tree, &text, &mut findings);
            }
        }

        let result = ValidationResult::from_findings(findings);
        log::info!(
            "Validated layout: {} error(s), {} warning(s)",
            result.errors.len(),
            result.warnings.len()
        );
        result
    }

    /// Validates the template's layout and warns about binding targets that
    /// name no component.
    pub fn validate_template(&self, template: &LayoutTemplate) -> ValidationResult {
        let mut result = self.validate(&template.layout);
        for (rule, element) in template.unresolved_targets() {
            result.warnings.push(format!(
                "Input variable '{}' targets unknown component '{}'",
                rule, element
            ));
        }
        result
    }

    /// Validates each visualization on its own; messages are prefixed with `Viz {index}: `.
    pub fn validate_visualizations(&self, visualizations: &[Visualization]) -> ValidationResult {
        let mut findings = Findings::default();
        for (i, visualization) in visualizations.iter().enumerate() {
            let result = self.validate(visualization.layout.as_str());
            for error in result.errors {
                findings.error(format!("Viz {}: {}", i, error));
            }
            for warning in result.warnings {
                findings.warning(format!("Viz {}: {}", i, warning));
            }
        }
        ValidationResult::from_findings(findings)
    }

    fn check_layout(&self, tree: &Value, text: &str, findings: &mut Findings) {
        match tree {
            Value::Object(root) => {
                self.check_root(root, findings);
                self.check_component(root, &NodePath::root(), findings);
                if let Some(children) = root.get("children") {
                    self.check_children(children, &NodePath::root(), findings);
                }
                check_names(tree, findings);
            }
            other => findings.error(format!(
                "Layout root must be an object, got: {}",
                json_type_name(other)
            )),
        }

        if text.contains("function(") || text.contains("function (") {
            findings.error(
                "JavaScript functions found in layout JSON - use template strings instead",
            );
        }
    }

    fn check_root(&self, root: &Map<String, Value>, findings: &mut Findings) {
        for property in &self.required_root_properties {
            if !root.contains_key(property) {
                findings.error(format!(
                    "Missing required {} property: {}",
                    self.root_type, property
                ));
            }
        }

        if root.get("type").and_then(Value::as_str) != Some(self.root_type.as_str()) {
            let found = root
                .get("type")
                .map(|t| match t {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .unwrap_or_else(|| "null".to_string());
            findings.error(format!(
                "Root type must be '{}', got: {}",
                self.root_type, found
            ));
        }
    }

    fn check_children(&self, children: &Value, path: &NodePath, findings: &mut Findings) {
        let Value::Array(items) = children else {
            findings.error(format!(
                "'children' at {} must be an array, found {}",
                path,
                json_type_name(children)
            ));
            return;
        };

        for (i, child) in items.iter().enumerate() {
            let child_path = path.child(i);
            let Value::Object(component) = child else {
                findings.error(format!(
                    "Component at {} must be an object, found {}",
                    child_path,
                    json_type_name(child)
                ));
                continue;
            };

            match component.get("type") {
                None => findings.error(format!(
                    "Component at {} missing required 'type' property",
                    child_path
                )),
                Some(Value::String(_)) => self.check_component(component, &child_path, findings),
                Some(other) => findings.error(format!(
                    "Component at {} has a non-string 'type' ({})",
                    child_path,
                    json_type_name(other)
                )),
            }

            if let Some(nested) = component.get("children") {
                self.check_children(nested, &child_path, findings);
            }
        }
    }

    fn check_component(
        &self,
        component: &Map<String, Value>,
        path: &NodePath,
        findings: &mut Findings,
    ) {
        let Some(kind) = component
            .get("type")
            .and_then(Value::as_str)
            .map(ComponentKind::from_tag)
        else {
            return;
        };
        for rule in self.rules.iter().filter(|r| r.applies_to(&kind)) {
            log::trace!("Running rule '{}' at {}", rule.rule_name(), path);
            rule.check(component, path, findings);
        }
    }
}

/// Duplicate names make binding targets ambiguous; a `parentId` naming
/// nothing leaves a component without a logical parent.
fn check_names(tree: &Value, findings: &mut Findings) {
    let names = component_names(tree);
    for duplicate in names.iter().duplicates() {
        findings.warning(format!("Duplicate component name '{}'", duplicate));
    }

    let known: AHashSet<&str> = names.iter().copied().collect();
    walk_parent_ids(tree, &known, findings);
}

fn walk_parent_ids(node: &Value, known: &AHashSet<&str>, findings: &mut Findings) {
    let Value::Object(object) = node else {
        return;
    };
    if let Some(parent) = object
        .get("parentId")
        .and_then(Value::as_str)
        .filter(|p| !p.is_empty())
    {
        if !known.contains(parent) {
            let name = object
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("<unnamed>");
            findings.warning(format!(
                "Component '{}' has parentId '{}', which matches no component",
                name, parent
            ));
        }
    }
    if let Some(Value::Array(children)) = object.get("children") {
        for child in children {
            walk_parent_ids(child, known, findings);
        }
    }
}

/// Validates with the default configuration.
pub fn validate<'a>(source: impl Into<LayoutSource<'a>>) -> ValidationResult {
    Validator::default().validate(source)
}
