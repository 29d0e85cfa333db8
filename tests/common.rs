//! Common test utilities for building layout templates and values.
use haichi::prelude::*;
use serde_json::{Value, json};

/// A complete `Document` root with a header and a table.
#[allow(dead_code)]
pub fn create_simple_layout() -> Value {
    json!({
        "type": "Document",
        "rows": 90,
        "columns": 160,
        "rowHeight": "1.11%",
        "colWidth": "0.625%",
        "gap": "0px",
        "children": [
            {
                "name": "Header0",
                "type": "Header",
                "text": "Placeholder",
                "style": { "fontSize": "20px" }
            },
            {
                "name": "DataTable0",
                "type": "DataTable",
                "columns": [],
                "data": []
            }
        ]
    })
}

/// A template whose single rule writes `title` into `Header0.text`.
#[allow(dead_code)]
pub fn create_simple_template() -> Value {
    json!({
        "layoutJson": create_simple_layout(),
        "inputVariables": [
            {
                "name": "title",
                "isRequired": false,
                "defaultValue": null,
                "targets": [{ "elementName": "Header0", "fieldName": "text" }]
            }
        ]
    })
}

/// A flat-storage layout in the authoring style of skill files: containers
/// own nothing directly and components point at them through `parentId`.
#[allow(dead_code)]
pub fn create_dashboard_template() -> Value {
    json!({
        "layoutJson": {
            "type": "Document",
            "rows": 90,
            "columns": 160,
            "rowHeight": "1.11%",
            "colWidth": "0.625%",
            "gap": "0px",
            "style": { "backgroundColor": "#ffffff" },
            "children": [
                { "name": "CardContainer0", "type": "CardContainer", "minHeight": "80px" },
                {
                    "name": "mainTitle",
                    "type": "Header",
                    "text": "Title",
                    "parentId": "CardContainer0"
                },
                {
                    "name": "subTitle",
                    "type": "Header",
                    "text": "Subtitle",
                    "parentId": "CardContainer0"
                },
                {
                    "name": "DataTable1",
                    "type": "DataTable",
                    "columns": [],
                    "data": [],
                    "footer": ""
                },
                {
                    "name": "Markdown0",
                    "type": "Markdown",
                    "text": "",
                    "parentId": "CardContainer0"
                }
            ]
        },
        "inputVariables": [
            {
                "name": "headline",
                "isRequired": false,
                "defaultValue": null,
                "targets": [{ "elementName": "mainTitle", "fieldName": "text" }]
            },
            {
                "name": "sub_headline",
                "isRequired": false,
                "defaultValue": null,
                "targets": [{ "elementName": "subTitle", "fieldName": "text" }]
            },
            {
                "name": "col_defs",
                "isRequired": false,
                "defaultValue": null,
                "targets": [{ "elementName": "DataTable1", "fieldName": "columns" }]
            },
            {
                "name": "data",
                "isRequired": false,
                "defaultValue": null,
                "targets": [{ "elementName": "DataTable1", "fieldName": "data" }]
            },
            {
                "name": "exec_summary",
                "isRequired": false,
                "defaultValue": null,
                "targets": [{ "elementName": "Markdown0", "fieldName": "text" }]
            }
        ]
    })
}

/// Builds a values map from a JSON object literal.
#[allow(dead_code)]
pub fn values(object: Value) -> ValuesMap {
    match object {
        Value::Object(map) => map.into_iter().collect(),
        _ => panic!("values fixture must be a JSON object"),
    }
}

/// Finds the component called `name` anywhere in a tree.
#[allow(dead_code)]
pub fn find_component<'a>(tree: &'a Value, name: &str) -> Option<&'a Value> {
    if tree.get("name").and_then(Value::as_str) == Some(name) {
        return Some(tree);
    }
    tree.get("children")
        .and_then(Value::as_array)
        .and_then(|children| children.iter().find_map(|c| find_component(c, name)))
}
