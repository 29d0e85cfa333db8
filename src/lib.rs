//! # Haichi - Layout Template Binding Engine
//!
//! **Haichi** populates declarative layout templates with runtime data. A
//! template is a static JSON tree of visual components (documents, containers,
//! headers, charts, tables) plus a list of named *input variables*, each of
//! which names the component fields it should be written into. Wiring a
//! template with a map of values produces a fully populated tree that a
//! rendering surface can draw as-is.
//!
//! ## Core Workflow
//!
//! 1.  **Load a Template**: Parse a `{layoutJson, inputVariables}` document (or a bare
//!     layout tree) into a `LayoutTemplate`, or implement `IntoTemplate` for your own format.
//! 2.  **Build a Binder**: `Binder::builder` loads the layout into a name-indexed arena
//!     once. Duplicate component names are rejected here.
//! 3.  **Wire**: Call `Binder::wire` with a values map as often as needed. Every call
//!     works on its own copy of the layout; the template is never modified.
//! 4.  **Validate**: Optionally run the populated layout through a `Validator` before
//!     handing it to a renderer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use haichi::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let template = json!({
//!         "layoutJson": {
//!             "type": "Document", "rows": 90, "columns": 160,
//!             "rowHeight": "1.11%", "colWidth": "0.625%", "gap": "0px",
//!             "children": [
//!                 { "name": "Header0", "type": "Header", "text": "" },
//!                 { "name": "DataTable0", "type": "DataTable", "columns": [], "data": [] }
//!             ]
//!         },
//!         "inputVariables": [
//!             { "name": "title", "isRequired": true,
//!               "targets": [{ "elementName": "Header0", "fieldName": "text" }] },
//!             { "name": "rows", "isRequired": false, "defaultValue": [],
//!               "targets": [{ "elementName": "DataTable0", "fieldName": "data" }] }
//!         ]
//!     });
//!
//!     let binder = Binder::builder(&template).build()?;
//!
//!     let mut values = ValuesMap::new();
//!     values.insert("title".to_string(), json!("Revenue by Region"));
//!     values.insert("rows".to_string(), json!([["EMEA", 120], ["APAC", 95]]));
//!
//!     let outcome = binder.wire(&values)?;
//!     for diagnostic in &outcome.diagnostics {
//!         println!("warning: {}", diagnostic);
//!     }
//!
//!     let report = Validator::default().validate(&outcome.layout);
//!     if report.success {
//!         println!("{}", outcome.to_text()?);
//!     } else {
//!         for error in &report.errors {
//!             println!("error: {}", error);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod binder;
pub mod error;
pub mod layout;
pub mod prelude;
pub mod template;
pub mod validator;
pub mod visualization;
