pub mod arena;
pub mod component;

pub use arena::*;
pub use component::*;

use serde_json::Value;

/// Collects every component `name` in a raw layout tree, in pre-order.
///
/// Unlike `LayoutArena::from_tree` this never fails, so duplicates are kept
/// and can be reported by the caller.
pub fn component_names(tree: &Value) -> Vec<&str> {
    let mut names = Vec::new();
    collect_names(tree, &mut names);
    names
}

fn collect_names<'a>(node: &'a Value, names: &mut Vec<&'a str>) {
    let Value::Object(object) = node else {
        return;
    };
    if let Some(name) = object.get("name").and_then(Value::as_str) {
        names.push(name);
    }
    if let Some(Value::Array(children)) = object.get("children") {
        for child in children {
            collect_names(child, names);
        }
    }
}
