use crate::error::LayoutError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// A titled, rendered layout as handed to a rendering surface.
///
/// The layout is kept as JSON text, which is what renderers consume and what
/// the validator's script detection scans.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Visualization {
    pub title: String,
    pub layout: String,
}

impl Visualization {
    pub fn new(title: &str, layout: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            layout: layout.into(),
        }
    }

    pub fn from_tree(title: &str, layout: &Value) -> Result<Self, LayoutError> {
        Ok(Self::new(title, serde_json::to_string(layout)?))
    }

    /// Loads a layout file, titling it after the file stem.
    pub fn from_file(path: &str) -> Result<Self, LayoutError> {
        let layout = fs::read_to_string(path)
            .map_err(|e| LayoutError::Io(format!("Could not read '{}': {}", path, e)))?;
        let title = Path::new(path)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(path);
        Ok(Self::new(title, layout))
    }

    pub fn parse_layout(&self) -> Result<Value, LayoutError> {
        Ok(serde_json::from_str(&self.layout)?)
    }
}
