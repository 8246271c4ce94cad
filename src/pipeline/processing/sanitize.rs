//! JSON-safety pass over the assembled payload.

use serde_json::{json, Value};

/// Replace every null (or NaN) field of every record in every list-valued
/// entry with `0`. Returns how many fields were replaced.
///
/// NaN cannot be represented in a `serde_json::Value`; serialization turns
/// it into null, so this pass covers both.
pub fn sanitize_payload(payload: &mut Value) -> usize {
    let Some(entries) = payload.as_object_mut() else {
        return 0;
    };

    let mut replaced = 0;
    for records in entries.values_mut().filter_map(Value::as_array_mut) {
        for record in records.iter_mut().filter_map(Value::as_object_mut) {
            for field in record.values_mut() {
                if is_unsafe(field) {
                    *field = json!(0);
                    replaced += 1;
                }
            }
        }
    }
    replaced
}

fn is_unsafe(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Number(n) => n.as_f64().map_or(false, |f| f.is_nan()),
        _ => false,
    }
}
