use std::fmt;

use serde_json::Value;

/// Value of a single attribute of an element.
///
/// `List` is only ever produced for `id`, `for` and `class`, which can receive
/// contributions from several sources. Lists may nest, they are flattened when
/// the attribute is rendered.
#[derive(Debug, PartialEq, Clone)]
pub enum AttrValue {
    Text(String),
    Flag(bool),
    List(Vec<AttrValue>),
}

impl AttrValue {
    /// Convert a value produced by a dynamic source. `null` means the source
    /// did not provide the attribute.
    pub fn from_json(value: &Value) -> Option<AttrValue> {
        match value {
            Value::Null => None,
            Value::Bool(flag) => Some(AttrValue::Flag(*flag)),
            Value::Number(number) => Some(AttrValue::Text(number.to_string())),
            Value::String(text) => Some(AttrValue::Text(text.clone())),
            Value::Array(items) => Some(AttrValue::List(
                items.iter().filter_map(AttrValue::from_json).collect(),
            )),
            Value::Object(_) => Some(AttrValue::Text(value.to_string())),
        }
    }

    /// Wraps scalars in a single element list
    pub fn into_list(self) -> Vec<AttrValue> {
        match self {
            AttrValue::List(items) => items,
            other => vec![other],
        }
    }

    /// Leaf values of this value with nested lists expanded, in order.
    pub fn flatten(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Vec<String>) {
        match self {
            AttrValue::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
            other => out.push(other.to_string()),
        }
    }
}

/// Lists render their items separated by commas, the same way a template
/// expression would stringify them.
impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(text) => f.write_str(text),
            AttrValue::Flag(flag) => write!(f, "{}", flag),
            AttrValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

impl From<&[&str]> for AttrValue {
    fn from(values: &[&str]) -> Self {
        AttrValue::List(values.iter().map(|v| AttrValue::from(*v)).collect())
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(values: Vec<String>) -> Self {
        AttrValue::List(values.into_iter().map(AttrValue::Text).collect())
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(values: Vec<AttrValue>) -> Self {
        AttrValue::List(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(AttrValue::from_json(&json!(null)), None);
        assert_eq!(AttrValue::from_json(&json!(false)), Some(AttrValue::Flag(false)));
        assert_eq!(AttrValue::from_json(&json!(0)), Some(AttrValue::from("0")));
        assert_eq!(AttrValue::from_json(&json!(1.5)), Some(AttrValue::from("1.5")));
        assert_eq!(AttrValue::from_json(&json!("")), Some(AttrValue::from("")));
    }

    #[test]
    fn test_from_json_array_drops_nulls() {
        let result = AttrValue::from_json(&json!(["a", null, ["b", 2]]));
        assert_eq!(
            result,
            Some(AttrValue::List(vec![
                AttrValue::from("a"),
                AttrValue::List(vec![AttrValue::from("b"), AttrValue::from("2")]),
            ]))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(AttrValue::from("x").to_string(), "x");
        assert_eq!(AttrValue::Flag(true).to_string(), "true");
        let nested = AttrValue::List(vec![
            AttrValue::from("a"),
            AttrValue::List(vec![AttrValue::from("b"), AttrValue::from("c")]),
        ]);
        assert_eq!(nested.to_string(), "a,b,c");
        assert_eq!(AttrValue::List(vec![]).to_string(), "");
    }

    #[test]
    fn test_flatten() {
        let nested = AttrValue::List(vec![
            AttrValue::List(vec![AttrValue::from("a")]),
            AttrValue::from("b"),
            AttrValue::List(vec![AttrValue::List(vec![AttrValue::Flag(true)])]),
        ]);
        assert_eq!(nested.flatten(), vec!["a", "b", "true"]);
        assert_eq!(AttrValue::from("x").flatten(), vec!["x"]);
    }

    #[test]
    fn test_into_list() {
        assert_eq!(AttrValue::from("a").into_list(), vec![AttrValue::from("a")]);
        let list: AttrValue = vec!["a".to_string(), "b".to_string()].into();
        assert_eq!(list.into_list().len(), 2);
    }
}
