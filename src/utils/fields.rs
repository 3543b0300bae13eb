use serde_json::{Map, Value};

use crate::error::{KustpatchError, KustpatchResult};

/// Splits dotted path into field names.
///
/// There's no escaping, so fields which contain
/// dots cannot be addressed.
#[must_use]
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('.').collect()
}

fn json_path(fields: &[&str]) -> String {
    format!(".{}", fields.join("."))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

/// Returns a reference to the value at the given path.
///
/// `Ok(None)` means that the path doesn't exist.
/// Null values on the way are treated as missing fields,
/// but going through any other scalar or sequence is an error.
pub fn nested_field<'a>(obj: &'a Value, fields: &[&str]) -> KustpatchResult<Option<&'a Value>> {
    let mut current = obj;
    for (idx, field) in fields.iter().enumerate() {
        match current {
            Value::Null => return Ok(None),
            Value::Object(map) => {
                let Some(next) = map.get(*field) else {
                    return Ok(None);
                };
                current = next;
            }
            other => {
                return Err(KustpatchError::FieldRead {
                    path: json_path(&fields[..=idx]),
                    found: other.to_string(),
                    kind: type_name(other),
                })
            }
        }
    }
    Ok(Some(current))
}

/// Same as [`nested_field`], but returns an owned copy.
pub fn nested_field_copy(obj: &Value, fields: &[&str]) -> KustpatchResult<Option<Value>> {
    Ok(nested_field(obj, fields)?.cloned())
}

/// Puts the value at the given path.
///
/// Missing or null intermediate fields are replaced
/// with empty mappings.
pub fn set_nested_field(obj: &mut Value, value: Value, fields: &[&str]) -> KustpatchResult<()> {
    let Some((last, parents)) = fields.split_last() else {
        return Err(KustpatchError::EmptyPath);
    };
    let mut current = obj;
    for (idx, field) in parents.iter().enumerate() {
        let Value::Object(map) = current else {
            return Err(KustpatchError::FieldWrite {
                path: json_path(&fields[..idx]),
            });
        };
        let entry = map.entry((*field).to_string()).or_insert(Value::Null);
        if entry.is_null() {
            *entry = Value::Object(Map::new());
        }
        if !entry.is_object() {
            return Err(KustpatchError::FieldWrite {
                path: json_path(&fields[..=idx]),
            });
        }
        current = entry;
    }
    let Value::Object(map) = current else {
        return Err(KustpatchError::FieldWrite {
            path: json_path(parents),
        });
    };
    map.insert((*last).to_string(), value);
    Ok(())
}
