//! # Attribute combining and rendering
//!
//! An element's attributes come from several independent sources. They are all merged
//! into one [`AttributeMap`] with [`combine_attributes`], which is then rendered with
//! [`AttributeMap::render`].
//!
//! ## Merge rules
//!
//! - **`id` / `for`**: Every contribution is kept. The most recent contribution goes
//!   first, and the values are joined with `-` when rendered, e.g. `id="new-old"`.
//!   This also holds for the second contribution: `x` then `y` renders `id="y-x"`,
//!   where classic Haml runtimes keep the first two in insertion order (`x-y`).
//! - **`class`**: Every contribution is kept in the order it was added, and the
//!   values are joined with a space when rendered, e.g. `class="first second"`.
//! - **Anything else**: The last contribution wins.
//!
//! Values that are absent or `false` never contribute. Empty strings and `0` do.

use std::mem;

use crate::value::AttrValue;

/// Boolean HTML attributes, rendered with their own name as the value.
const BOOLEAN_ATTRIBUTES: [&str; 3] = ["selected", "checked", "disabled"];

/// Attribute name to value, iterated in the order the names were first added.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AttributeMap {
    entries: Vec<(String, AttrValue)>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut AttrValue> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Set the value of an attribute. An existing attribute keeps its position.
    pub fn insert(&mut self, name: &str, value: AttrValue) {
        match self.get_mut(name) {
            Some(existing) => *existing = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the attributes as ` name="value"` pairs, ready to be placed
    /// right after the tag name. Returns an empty string if nothing is present.
    ///
    /// Values are written as they are, NOT HTML-escaped.
    pub fn render(&self) -> String {
        let mut html = String::new();
        for (name, value) in self.iter() {
            if !has_value(Some(value)) {
                continue;
            }
            let rendered = match (name, value) {
                ("id" | "for", AttrValue::List(_)) => value.flatten().join("-"),
                ("class", AttrValue::List(_)) => value.flatten().join(" "),
                _ => attr_value(name, value),
            };
            html.push_str(&format!(" {}=\"{}\"", name, rendered));
        }
        html
    }
}

/// Whether a value contributes to the attributes. Anything but a missing value
/// or `false` does, including empty strings.
pub fn has_value(value: Option<&AttrValue>) -> bool {
    matches!(value, Some(value) if *value != AttrValue::Flag(false))
}

/// Rendered value of a single attribute
pub fn attr_value(name: &str, value: &AttrValue) -> String {
    if BOOLEAN_ATTRIBUTES.contains(&name) {
        name.to_string()
    } else {
        value.to_string()
    }
}

/// Merge a single attribute into `attributes`, see the module docs for the rules.
pub fn combine_attributes(attributes: &mut AttributeMap, name: &str, value: Option<AttrValue>) {
    let value = match value {
        Some(value) if has_value(Some(&value)) => value,
        _ => return,
    };

    match name {
        "id" | "for" => {
            // Empty ids are dropped instead of overwriting
            if value.to_string().is_empty() {
                return;
            }
            match attributes.get_mut(name) {
                Some(existing) => {
                    let previous = mem::replace(existing, AttrValue::List(Vec::new()));
                    *existing = match previous {
                        AttrValue::List(mut items) => {
                            items.insert(0, value);
                            AttrValue::List(items)
                        }
                        scalar => AttrValue::List(vec![value, scalar]),
                    };
                }
                None => attributes.insert(name, value),
            }
        }
        "class" => {
            let classes = value.into_list();
            match attributes.get_mut(name) {
                Some(existing) => {
                    let previous = mem::replace(existing, AttrValue::List(Vec::new()));
                    let mut items = previous.into_list();
                    items.extend(classes);
                    *existing = AttrValue::List(items);
                }
                None => attributes.insert(name, AttrValue::List(classes)),
            }
        }
        _ => attributes.insert(name, value),
    }
}
