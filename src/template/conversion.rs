use super::definition::LayoutTemplate;
use crate::error::LayoutError;
use serde_json::Value;

/// A trait for anything that can be turned into a `LayoutTemplate`.
///
/// The binder accepts any implementor, so callers can hand it a parsed
/// template, a raw JSON value (full template or bare layout tree), JSON text,
/// or their own authoring format.
///
/// # Example
///
/// ```rust,no_run
/// use haichi::error::LayoutError;
/// use haichi::template::{BindingRule, IntoTemplate, LayoutTemplate, Target};
///
/// // A custom authoring format: one header whose text is an input variable.
/// struct TitleCard { title_variable: String }
///
/// impl IntoTemplate for TitleCard {
///     fn into_template(self) -> Result<LayoutTemplate, LayoutError> {
///         Ok(LayoutTemplate {
///             layout: serde_json::json!({
///                 "type": "Document",
///                 "children": [{ "name": "Header0", "type": "Header", "text": "" }]
///             }),
///             input_variables: vec![BindingRule::new(
///                 &self.title_variable,
///                 vec![Target::new("Header0", "text")],
///             )],
///         })
///     }
/// }
/// ```
pub trait IntoTemplate {
    fn into_template(self) -> Result<LayoutTemplate, LayoutError>;
}

impl IntoTemplate for LayoutTemplate {
    fn into_template(self) -> Result<LayoutTemplate, LayoutError> {
        Ok(self)
    }
}

impl IntoTemplate for &LayoutTemplate {
    fn into_template(self) -> Result<LayoutTemplate, LayoutError> {
        Ok(self.clone())
    }
}

impl IntoTemplate for &Value {
    fn into_template(self) -> Result<LayoutTemplate, LayoutError> {
        LayoutTemplate::from_value(self)
    }
}

impl IntoTemplate for Value {
    fn into_template(self) -> Result<LayoutTemplate, LayoutError> {
        LayoutTemplate::from_value(&self)
    }
}

impl IntoTemplate for &str {
    fn into_template(self) -> Result<LayoutTemplate, LayoutError> {
        self.parse()
    }
}
