//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the haichi crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use haichi::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let template = LayoutTemplate::from_file("path/to/template.json")?;
//! let values = values_from_str(&std::fs::read_to_string("path/to/values.json")?)?;
//!
//! let layout_text = Binder::new(template)?.wire_to_text(&values)?;
//! let report = validate(layout_text.as_str());
//! println!("success: {}, errors: {:?}", report.success, report.errors);
//! # Ok(())
//! # }
//! ```

// Binding
pub use crate::binder::{
    Binder, BinderBuilder, RequiredPolicy, ValueLookup, ValuesMap, WiringOutcome,
    values_from_str, wire, wire_to_text,
};

// Templates and layout model
pub use crate::layout::{Component, ComponentKind, FieldWrite, LayoutArena};
pub use crate::template::{BindingRule, IntoTemplate, LayoutTemplate, Target, TemplateSet};

// Validation
pub use crate::validator::{
    ComponentRule, LayoutSource, ValidationResult, Validator, ValidatorBuilder, validate,
};
pub use crate::visualization::Visualization;

// Error types
pub use crate::error::{BindingDiagnostic, LayoutError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
