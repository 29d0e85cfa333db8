use super::rules::{Findings, NodePath};
use serde_json::Value;

/// Walks a chart's options looking for `formatter` strings.
///
/// A formatter that mentions `function` is script and the renderer cannot
/// run it. A formatter without any `{...}` placeholder is probably a plain
/// label where a template string was intended.
pub(super) fn check_formatters(options: &Value, path: &NodePath, findings: &mut Findings) {
    match options {
        Value::Object(object) => {
            for (key, value) in object {
                let current = path.field(key);
                match (key.as_str(), value) {
                    ("formatter", Value::String(text)) => {
                        if text.to_lowercase().contains("function") {
                            findings.error(format!(
                                "Formatter function at {} - use template strings instead",
                                current
                            ));
                        } else if !text.contains('{') && !text.contains('}') {
                            findings.warning(format!(
                                "Formatter at {} may need template string syntax",
                                current
                            ));
                        }
                    }
                    (_, Value::Object(_) | Value::Array(_)) => {
                        check_formatters(value, &current, findings);
                    }
                    _ => {}
                }
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                check_formatters(item, &path.index(i), findings);
            }
        }
        _ => {}
    }
}
