//! Bridges between Python objects and the attribute runtime.
//!
//! - Values returned by template callables are converted to JSON values. Dicts become
//!   mappings, lists and tuples become arrays, and anything the JSON model has no
//!   place for (dates, custom objects) becomes its `str()`.
//! - Model objects used as object references are wrapped in [`PyObjectRef`], which looks
//!   up `id` / `class` as attributes first, and via `obj.get(key)` second.

use haml_attributes::{Accessor, EvaluationError, ObjectReference};
use pyo3::exceptions::PyAttributeError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat, PyInt, PyList, PyString, PyTuple};
use serde_json::{Map, Number, Value};

pub fn to_value<'py>(object: &Bound<'py, PyAny>) -> PyResult<Value> {
    if object.is_none() {
        return Ok(Value::Null);
    }
    // `bool` is a subclass of `int`, so it has to be checked first
    if object.is_instance_of::<PyBool>() {
        return Ok(Value::Bool(object.extract::<bool>()?));
    }
    if object.is_instance_of::<PyInt>() {
        if let Ok(number) = object.extract::<i64>() {
            return Ok(Value::from(number));
        }
    }
    if object.is_instance_of::<PyFloat>() {
        let number = object.extract::<f64>()?;
        if let Some(number) = Number::from_f64(number) {
            return Ok(Value::Number(number));
        }
    }
    if object.is_instance_of::<PyString>() {
        return Ok(Value::String(object.extract::<String>()?));
    }
    if let Ok(dict) = object.extract::<Bound<'py, PyDict>>() {
        let mut map = Map::new();
        for (key, item) in dict.iter() {
            map.insert(key.str()?.to_string(), to_value(&item)?);
        }
        return Ok(Value::Object(map));
    }
    if let Ok(list) = object.extract::<Bound<'py, PyList>>() {
        return list
            .iter()
            .map(|item| to_value(&item))
            .collect::<PyResult<Vec<Value>>>()
            .map(Value::Array);
    }
    if let Ok(tuple) = object.extract::<Bound<'py, PyTuple>>() {
        return tuple
            .iter()
            .map(|item| to_value(&item))
            .collect::<PyResult<Vec<Value>>>()
            .map(Value::Array);
    }
    Ok(Value::String(object.str()?.to_string()))
}

pub fn to_evaluation_error(error: PyErr) -> EvaluationError {
    EvaluationError::new(error.to_string())
}

/// Python model object used as an object reference, e.g. `%div[user]`
pub struct PyObjectRef<'py> {
    pub object: Bound<'py, PyAny>,
}

impl ObjectReference for PyObjectRef<'_> {
    fn property(&self, name: &str) -> Result<Option<Value>, EvaluationError> {
        // Dict keys are not attributes, they are found via `dict.get()`
        if self.object.is_instance_of::<PyDict>() {
            return Ok(None);
        }
        match self.object.getattr(name) {
            Ok(value) => to_value(&value).map(Some).map_err(to_evaluation_error),
            Err(err) if err.is_instance_of::<PyAttributeError>(self.object.py()) => Ok(None),
            Err(err) => Err(to_evaluation_error(err)),
        }
    }

    fn accessor(&self) -> Option<&dyn Accessor> {
        match self.object.hasattr("get") {
            Ok(true) => Some(self),
            _ => None,
        }
    }
}

impl Accessor for PyObjectRef<'_> {
    fn get(&self, key: &str) -> Result<Value, EvaluationError> {
        let value = self
            .object
            .call_method1("get", (key,))
            .map_err(to_evaluation_error)?;
        to_value(&value).map_err(to_evaluation_error)
    }
}
