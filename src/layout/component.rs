use serde_json::{Map, Value};
use std::fmt;

/// The `type` tag of a layout component.
///
/// The variants cover the component kinds the engine knows something about.
/// Every other tag is carried verbatim in `Other`, so new visual component
/// kinds pass through the binder and validator untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Document,
    FlexContainer,
    CardContainer,
    Header,
    Paragraph,
    Markdown,
    HighchartsChart,
    DataTable,
    Other(String),
}

impl ComponentKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Document" => ComponentKind::Document,
            "FlexContainer" => ComponentKind::FlexContainer,
            "CardContainer" => ComponentKind::CardContainer,
            "Header" => ComponentKind::Header,
            "Paragraph" => ComponentKind::Paragraph,
            "Markdown" => ComponentKind::Markdown,
            "HighchartsChart" => ComponentKind::HighchartsChart,
            "DataTable" => ComponentKind::DataTable,
            other => ComponentKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ComponentKind::Document => "Document",
            ComponentKind::FlexContainer => "FlexContainer",
            ComponentKind::CardContainer => "CardContainer",
            ComponentKind::Header => "Header",
            ComponentKind::Paragraph => "Paragraph",
            ComponentKind::Markdown => "Markdown",
            ComponentKind::HighchartsChart => "HighchartsChart",
            ComponentKind::DataTable => "DataTable",
            ComponentKind::Other(tag) => tag,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single node of a layout, minus its nested children.
///
/// All attributes (including `name`, `type` and `parentId`) live in one
/// attribute bag so that fields the engine does not understand survive a
/// wiring pass unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    kind: Option<ComponentKind>,
    attributes: Map<String, Value>,
}

impl Component {
    pub fn from_attributes(attributes: Map<String, Value>) -> Self {
        let kind = attributes
            .get("type")
            .and_then(Value::as_str)
            .map(ComponentKind::from_tag);
        Self { kind, attributes }
    }

    /// `None` when the component has no string `type` attribute.
    pub fn kind(&self) -> Option<&ComponentKind> {
        self.kind.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.get("name").and_then(Value::as_str)
    }

    /// The logical parent named by `parentId`, if any. Empty strings count as absent.
    pub fn parent_id(&self) -> Option<&str> {
        self.attributes
            .get("parentId")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    pub fn attribute(&self, field: &str) -> Option<&Value> {
        self.attributes.get(field)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Overwrites one attribute and returns the previous value.
    pub fn set_attribute(&mut self, field: &str, value: Value) -> Option<Value> {
        if field == "type" {
            self.kind = value.as_str().map(ComponentKind::from_tag);
        }
        self.attributes.insert(field.to_string(), value)
    }

    pub(crate) fn into_attributes(self) -> Map<String, Value> {
        self.attributes
    }
}
