use thiserror::Error;

/// Errors that abort a template load or wiring call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Failed to parse layout JSON: {0}")]
    JsonParseError(String),

    #[error("Invalid layout template: {0}")]
    InvalidTemplate(String),

    #[error("Component name '{0}' is used by more than one component in the layout")]
    DuplicateComponentName(String),

    #[error("Input variable '{rule}' is required but no value or default was supplied")]
    MissingRequiredValue { rule: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        LayoutError::JsonParseError(err.to_string())
    }
}

/// Recoverable problems found while applying binding rules.
///
/// These never abort a wiring pass; they are collected into the
/// `WiringOutcome` next to the populated layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingDiagnostic {
    #[error("Input variable '{rule}' is required but no value or default was supplied")]
    MissingRequiredValue { rule: String },

    #[error("Input variable '{rule}' targets component '{element}', which is not in the layout")]
    UnknownTarget { rule: String, element: String },

    #[error("Input variable '{rule}' renames component '{element}' to '{name}', which is already taken")]
    NameCollision {
        rule: String,
        element: String,
        name: String,
    },
}
