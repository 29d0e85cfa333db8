use crate::error::LayoutError;
use crate::layout::component_names;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::str::FromStr;

/// One place a bound value is written: a field on a named component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub element_name: String,
    pub field_name: String,
}

impl Target {
    pub fn new(element_name: &str, field_name: &str) -> Self {
        Self {
            element_name: element_name.to_string(),
            field_name: field_name.to_string(),
        }
    }
}

/// A named input variable and the targets it is written to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingRule {
    pub name: String,
    #[serde(default)]
    pub is_required: bool,
    /// A `null` default in the source JSON is read as "no default".
    #[serde(default)]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub targets: Vec<Target>,
}

impl BindingRule {
    pub fn new(name: &str, targets: Vec<Target>) -> Self {
        Self {
            name: name.to_string(),
            is_required: false,
            default_value: None,
            targets,
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// A static layout tree plus the input variables that populate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTemplate {
    #[serde(rename = "layoutJson")]
    pub layout: Value,
    #[serde(rename = "inputVariables", default)]
    pub input_variables: Vec<BindingRule>,
}

impl LayoutTemplate {
    /// Wraps a bare layout tree with no input variables.
    pub fn bare(layout: Value) -> Self {
        Self {
            layout,
            input_variables: Vec::new(),
        }
    }

    /// Reads either a `{layoutJson, inputVariables}` object or a bare layout tree.
    pub fn from_value(value: &Value) -> Result<Self, LayoutError> {
        match value {
            Value::Object(object) if object.contains_key("layoutJson") => {
                serde_json::from_value(value.clone())
                    .map_err(|e| LayoutError::InvalidTemplate(e.to_string()))
            }
            Value::Array(_) => Err(LayoutError::InvalidTemplate(
                "expected a single template but found an array; load it as a TemplateSet"
                    .to_string(),
            )),
            _ => Ok(Self::bare(value.clone())),
        }
    }

    pub fn from_file(path: &str) -> Result<Self, LayoutError> {
        let content = fs::read_to_string(path)
            .map_err(|e| LayoutError::Io(format!("Could not read '{}': {}", path, e)))?;
        content.parse()
    }

    pub fn rule(&self, name: &str) -> Option<&BindingRule> {
        self.input_variables.iter().find(|rule| rule.name == name)
    }

    /// `(rule, element)` pairs whose element name is not in the layout.
    pub fn unresolved_targets(&self) -> Vec<(&str, &str)> {
        let names: AHashSet<&str> = component_names(&self.layout).into_iter().collect();
        self.input_variables
            .iter()
            .flat_map(|rule| {
                rule.targets
                    .iter()
                    .map(move |target| (rule.name.as_str(), target.element_name.as_str()))
            })
            .filter(|(_, element)| !names.contains(element))
            .collect()
    }

    pub fn to_json_string(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromStr for LayoutTemplate {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(&value)
    }
}

/// An ordered bundle of templates, as authored in a single JSON array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateSet {
    templates: Vec<LayoutTemplate>,
}

impl TemplateSet {
    pub fn from_value(value: &Value) -> Result<Self, LayoutError> {
        let templates = match value {
            Value::Array(items) => items
                .iter()
                .map(LayoutTemplate::from_value)
                .collect::<Result<Vec<_>, _>>()?,
            single => vec![LayoutTemplate::from_value(single)?],
        };
        Ok(Self { templates })
    }

    pub fn from_file(path: &str) -> Result<Self, LayoutError> {
        let content = fs::read_to_string(path)
            .map_err(|e| LayoutError::Io(format!("Could not read '{}': {}", path, e)))?;
        content.parse()
    }

    pub fn get(&self, index: usize) -> Option<&LayoutTemplate> {
        self.templates.get(index)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LayoutTemplate> {
        self.templates.iter()
    }
}

impl FromStr for TemplateSet {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(&value)
    }
}

impl IntoIterator for TemplateSet {
    type Item = LayoutTemplate;
    type IntoIter = std::vec::IntoIter<LayoutTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.into_iter()
    }
}
