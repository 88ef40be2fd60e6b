use serde_json::Value;

/// Linearize a record into a single lower-cased, space-joined text blob.
///
/// Scalar string and number fields are appended in field order; falsy values
/// (empty strings, zero, null, false) are skipped. Nested objects are walked
/// while the current depth is below `max_depth`, so a bound of 0 keeps only
/// top-level scalar fields. Arrays are treated as index-keyed objects.
pub fn flatten(node: &Value, max_depth: usize) -> String {
    let mut blob = String::new();
    flatten_into(node, max_depth, 0, &mut blob);
    blob
}

fn flatten_into(node: &Value, max_depth: usize, current_depth: usize, blob: &mut String) {
    match node {
        Value::Object(fields) => {
            for value in fields.values() {
                flatten_value(value, max_depth, current_depth, blob);
            }
        }
        Value::Array(items) => {
            for value in items {
                flatten_value(value, max_depth, current_depth, blob);
            }
        }
        _ => {}
    }
}

fn flatten_value(value: &Value, max_depth: usize, current_depth: usize, blob: &mut String) {
    if !is_truthy(value) {
        return;
    }

    match value {
        Value::String(text) => {
            blob.push_str(text.to_lowercase().trim());
            blob.push(' ');
        }
        Value::Number(number) => {
            blob.push_str(&number.to_string());
            blob.push(' ');
        }
        Value::Object(_) | Value::Array(_) if current_depth < max_depth => {
            flatten_into(value, max_depth, current_depth + 1, blob);
        }
        _ => {}
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Object(_) | Value::Array(_) => true,
    }
}
