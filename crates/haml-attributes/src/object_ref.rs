//! # Object references
//!
//! An object reference is a model object attached to an element, e.g. `%div[user]`.
//! The element takes its `id` and `class` from the object.
//!
//! Model objects come in two flavours, and a single object may be both:
//!
//! - **Direct properties**: the object has an `id` / `class` field, e.g. a plain JSON
//!   object like `{"id": "user-1"}`
//! - **Accessor**: the object has a `get(key)` method, e.g. a model backed by a
//!   key-value store
//!
//! A direct property is preferred. For `id` the accessor is only asked if the property
//! is missing or `null`. A `class` property must also be non-empty: `""`, `0` and
//! `false` count as missing too. If the object has neither, it contributes nothing.

use serde_json::Value;

use crate::error::EvaluationError;

/// Accessor-based lookup, i.e. `object.get(key)`
pub trait Accessor {
    fn get(&self, key: &str) -> Result<Value, EvaluationError>;
}

pub trait ObjectReference {
    /// Direct property of the object, `Ok(None)` when the object has no such property.
    fn property(&self, _name: &str) -> Result<Option<Value>, EvaluationError> {
        Ok(None)
    }

    /// The accessor of the object, `None` when the object has no accessor.
    fn accessor(&self) -> Option<&dyn Accessor> {
        None
    }

    fn id(&self) -> Result<Option<Value>, EvaluationError> {
        lookup(self, "id", |value| !value.is_null())
    }

    fn class(&self) -> Result<Option<Value>, EvaluationError> {
        lookup(self, "class", is_truthy)
    }
}

/// `null`, `false`, `0` and `""` are falsy, everything else is truthy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn lookup<O, P>(object: &O, name: &str, accept: P) -> Result<Option<Value>, EvaluationError>
where
    O: ObjectReference + ?Sized,
    P: Fn(&Value) -> bool,
{
    if let Some(value) = object.property(name)? {
        if accept(&value) {
            return Ok(Some(value));
        }
    }
    match object.accessor() {
        Some(accessor) => {
            let value = accessor.get(name)?;
            Ok(if value.is_null() { None } else { Some(value) })
        }
        None => Ok(None),
    }
}

/// Plain objects expose their fields as direct properties
impl ObjectReference for Value {
    fn property(&self, name: &str) -> Result<Option<Value>, EvaluationError> {
        Ok(self.get(name).cloned())
    }
}

/// Wraps a `get(key)` function as an accessor-only model object
pub struct AccessorObject<F>(pub F);

impl<F> Accessor for AccessorObject<F>
where
    F: Fn(&str) -> Result<Value, EvaluationError>,
{
    fn get(&self, key: &str) -> Result<Value, EvaluationError> {
        (self.0)(key)
    }
}

impl<F> ObjectReference for AccessorObject<F>
where
    F: Fn(&str) -> Result<Value, EvaluationError>,
{
    fn accessor(&self) -> Option<&dyn Accessor> {
        Some(self)
    }
}
