use serde_json::{Map, Value};

/// Only mappings are hashes. Arrays, strings, numbers, booleans and null are
/// leaf values.
pub fn is_hash(value: &Value) -> bool {
    value.is_object()
}

/// Flattens a nested hash into a single level hash by joining the keys with `-`.
///
/// This lets a template write `{data: {foo: 'x', bar: 'y'}}` and have it render
/// as `data-foo="x" data-bar="y"`, to any depth.
///
/// A leaf value is returned as `{root_key: value}`, or as is if there is no `root_key`.
pub fn flatten_hash(root_key: Option<&str>, value: Value) -> Value {
    match value {
        Value::Object(object) => {
            let mut result = Map::new();
            for (attr, value) in object {
                let key = match root_key {
                    Some(root) => format!("{}-{}", root, attr),
                    None => attr,
                };
                match flatten_hash(Some(&key), value) {
                    Value::Object(flattened) => result.extend(flattened),
                    flattened => {
                        result.insert(key, flattened);
                    }
                }
            }
            Value::Object(result)
        }
        leaf => match root_key {
            Some(root) => {
                let mut result = Map::new();
                result.insert(root.to_string(), leaf);
                Value::Object(result)
            }
            None => leaf,
        },
    }
}
