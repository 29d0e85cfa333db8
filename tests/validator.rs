//! Tests for structural layout validation.
mod common;
use common::*;
use haichi::prelude::*;
use haichi::validator::{Findings, NodePath};
use serde_json::{Map, Value, json};

#[test]
fn test_complete_layout_is_valid() {
    let result = validate(&create_simple_layout());
    assert!(result.success, "unexpected errors: {:?}", result.errors);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_missing_root_property_yields_one_error() {
    let mut layout = create_simple_layout();
    layout.as_object_mut().unwrap().remove("rows");

    let result = validate(&layout);
    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("rows"));
}

#[test]
fn test_each_missing_root_property_is_reported() {
    let result = validate(&json!({ "type": "Document" }));
    for property in ["rows", "columns", "rowHeight", "colWidth", "gap", "children"] {
        assert!(
            result.errors.iter().any(|e| e.ends_with(property)),
            "no error for '{}': {:?}",
            property,
            result.errors
        );
    }
    assert_eq!(result.errors.len(), 6);
}

#[test]
fn test_wrong_root_type() {
    let mut layout = create_simple_layout();
    layout["type"] = json!("Canvas");

    let result = validate(&layout);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("Canvas"));
}

#[test]
fn test_children_as_string_yields_one_error() {
    let mut layout = create_simple_layout();
    layout["children"] = json!("not a list");

    let result = validate(&layout);
    assert_eq!(result.errors.len(), 1, "{:?}", result.errors);
    assert!(result.errors[0].contains("must be an array"));
}

#[test]
fn test_invalid_json_is_a_single_fatal_error() {
    let result = validate("{ \"type\": \"Document\", ");
    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("Invalid JSON"));
}

#[test]
fn test_non_object_root() {
    let result = validate("[1, 2, 3]");
    assert!(!result.success);
    assert!(result.errors[0].contains("must be an object"));
}

#[test]
fn test_function_injection_is_an_error() {
    let text = r#"{
        "type": "Document", "rows": 1, "columns": 1, "rowHeight": "1%",
        "colWidth": "1%", "gap": "0px",
        "children": [{
            "name": "Chart0",
            "type": "HighchartsChart",
            "options": { "tooltip": { "formatter": "function(x) { return x; }" } }
        }]
    }"#;

    let result = validate(text);
    assert!(!result.success);
    assert!(result.errors.iter().any(|e| e.contains("JavaScript functions")));
    assert!(
        result
            .errors
            .iter()
            .any(|e| e.contains("root.children[0].options.tooltip.formatter"))
    );
}

#[test]
fn test_function_injection_detected_in_parsed_tree() {
    let mut layout = create_simple_layout();
    layout["children"][0]["text"] = json!("function (x) { return x; }");

    let result = validate(&layout);
    assert!(result.errors.iter().any(|e| e.contains("JavaScript functions")));
}

#[test]
fn test_child_problems_are_all_collected() {
    let mut layout = create_simple_layout();
    layout["children"] = json!([
        "just a string",
        { "name": "NoType" },
        { "name": "Box", "type": "FlexContainer", "children": "" },
        {
            "name": "Outer",
            "type": "FlexContainer",
            "children": [{ "name": "DeepNoType" }]
        }
    ]);

    let result = validate(&layout);
    assert_eq!(result.errors.len(), 4, "{:?}", result.errors);
    assert!(result.errors[0].contains("root.children[0] must be an object"));
    assert!(result.errors[1].contains("root.children[1] missing required 'type'"));
    assert!(result.errors[2].contains("'children' at root.children[2] must be an array"));
    assert!(result.errors[3].contains("root.children[3].children[0] missing required 'type'"));
}

#[test]
fn test_chart_without_options_is_a_warning() {
    let mut layout = create_simple_layout();
    layout["children"] = json!([{ "name": "Chart0", "type": "HighchartsChart" }]);

    let result = validate(&layout);
    assert!(result.success);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("missing 'options'"));
}

#[test]
fn test_table_without_payload_warns_per_field() {
    let mut layout = create_simple_layout();
    layout["children"] = json!([{ "name": "Table0", "type": "DataTable" }]);

    let result = validate(&layout);
    assert!(result.success);
    assert_eq!(result.warnings.len(), 2);
    assert!(result.warnings.iter().any(|w| w.contains("'columns'")));
    assert!(result.warnings.iter().any(|w| w.contains("'data'")));
}

#[test]
fn test_formatter_without_template_braces_warns() {
    let mut layout = create_simple_layout();
    layout["children"] = json!([{
        "name": "Chart0",
        "type": "HighchartsChart",
        "options": {
            "series": [{ "dataLabels": { "formatter": "percent" } }],
            "yAxis": { "labels": { "formatter": "{value}%" } }
        }
    }]);

    let result = validate(&layout);
    assert!(result.success);
    assert_eq!(result.warnings.len(), 1, "{:?}", result.warnings);
    assert!(result.warnings[0].contains("root.children[0].options.series[0].dataLabels.formatter"));
}

#[test]
fn test_name_hygiene_warnings() {
    let mut layout = create_simple_layout();
    layout["children"] = json!([
        { "name": "Card", "type": "CardContainer" },
        { "name": "Card", "type": "CardContainer" },
        { "name": "Orphan", "type": "Header", "text": "", "parentId": "Missing" },
        { "name": "Child", "type": "Header", "text": "", "parentId": "Card" }
    ]);

    let result = validate(&layout);
    assert!(result.success);
    assert_eq!(result.warnings.len(), 2, "{:?}", result.warnings);
    assert!(result.warnings.iter().any(|w| w.contains("Duplicate component name 'Card'")));
    assert!(result.warnings.iter().any(|w| w.contains("'Missing'")));
}

#[test]
fn test_validate_template_flags_unknown_targets() {
    let template = LayoutTemplate {
        layout: create_simple_layout(),
        input_variables: vec![
            BindingRule::new("title", vec![Target::new("Header0", "text")]),
            BindingRule::new("ghost", vec![Target::new("Nowhere", "text")]),
        ],
    };

    let result = Validator::default().validate_template(&template);
    assert!(result.success);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("Nowhere"));
}

#[test]
fn test_validate_visualizations_prefixes_index() {
    let good = Visualization::from_tree("Good", &create_simple_layout()).unwrap();
    let bad = Visualization::new("Bad", "{ broken");

    let result = Validator::default().validate_visualizations(&[good, bad]);
    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].starts_with("Viz 1: Invalid JSON"));
}

#[test]
fn test_custom_root_configuration() {
    let validator = Validator::builder()
        .with_root_type("Canvas")
        .with_required_root_properties(&["type", "children"])
        .build();

    let result = validator.validate(&json!({ "type": "Canvas", "children": [] }));
    assert!(result.success, "{:?}", result.errors);
}

struct HeaderTextRule;

impl ComponentRule for HeaderTextRule {
    fn rule_name(&self) -> &str {
        "header-text"
    }

    fn applies_to(&self, kind: &ComponentKind) -> bool {
        *kind == ComponentKind::Header
    }

    fn check(&self, component: &Map<String, Value>, path: &NodePath, findings: &mut Findings) {
        if component.get("text").and_then(Value::as_str) == Some("") {
            findings.error(format!("Header at {} has empty text", path));
        }
    }
}

#[test]
fn test_custom_rule_runs_alongside_defaults() {
    let validator = Validator::builder()
        .with_rule(Box::new(HeaderTextRule))
        .build();
    let mut layout = create_simple_layout();
    layout["children"][0]["text"] = json!("");
    layout["children"][1] = json!({ "name": "Chart", "type": "HighchartsChart" });

    let result = validator.validate(&layout);
    assert_eq!(result.errors, vec!["Header at root.children[0] has empty text"]);
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_without_default_rules() {
    let validator = Validator::builder().without_default_rules().build();
    let mut layout = create_simple_layout();
    layout["children"] = json!([{ "name": "Chart", "type": "HighchartsChart" }]);

    let result = validator.validate(&layout);
    assert!(result.success);
    assert!(result.warnings.is_empty());
}
