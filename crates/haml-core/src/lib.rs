use haml_attributes::{AttrValue, AttributeSources, ErrorPolicy, ObjectReference, SourceLocation};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

mod convert;

use convert::{to_evaluation_error, to_value, PyObjectRef};

/// HTML-escape the text. Falsy values (`None`, `0`, `False`, `""`) render as an empty string.
#[pyfunction]
#[pyo3(signature = (text = None))]
fn escape_html(text: Option<&Bound<'_, PyAny>>) -> PyResult<String> {
    match text {
        Some(text) if text.is_truthy()? => Ok(haml_runtime::escape_html(&text.str()?.to_string())),
        _ => Ok(String::new()),
    }
}

#[pyfunction]
fn preserve_whitespace(text: String) -> String {
    haml_runtime::preserve_whitespace(&text)
}

#[pyfunction]
fn indent_text(level: usize) -> String {
    haml_runtime::indent_text(level)
}

#[pyfunction]
fn template_error(line: usize, character: usize, current_line: String, message: String) -> String {
    haml_runtime::template_error(line, character, &current_line, &message)
}

#[pyfunction]
fn trim(text: String, chars: usize) -> String {
    haml_runtime::trim_chars(&text, chars)
}

#[pyfunction]
fn apply_filter(name: String, lines: Vec<String>, indent: usize) -> PyResult<String> {
    let filter = haml_runtime::filter(&name).map_err(|err| PyValueError::new_err(err.to_string()))?;
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    Ok(filter.render(&lines, indent))
}

/// Generate the attribute string of an element from all of its attribute sources.
///
/// `obj_ref_fn` and `attr_fn` are called with the `context`. Errors they raise are
/// re-raised as `ValueError` pointing at the template source, unless `on_error="log"`.
#[pyfunction]
#[pyo3(signature = (context, id, classes, obj_ref_fn, attr_list, attr_fn, line, character, current_line, on_error = None))]
#[allow(clippy::too_many_arguments)]
fn generate_element_attributes<'py>(
    context: &Bound<'py, PyAny>,
    id: Option<String>,
    classes: Vec<String>,
    obj_ref_fn: Option<&Bound<'py, PyAny>>,
    attr_list: Option<&Bound<'py, PyDict>>,
    attr_fn: Option<&Bound<'py, PyAny>>,
    line: usize,
    character: usize,
    current_line: String,
    on_error: Option<String>,
) -> PyResult<String> {
    let policy: ErrorPolicy = on_error
        .as_deref()
        .unwrap_or("raise")
        .parse()
        .map_err(|err: haml_attributes::AttributeError| PyValueError::new_err(err.to_string()))?;

    let classes: Vec<&str> = classes.iter().map(String::as_str).collect();
    let mut sources = AttributeSources::new().classes(&classes);
    if let Some(id) = id.as_deref() {
        sources = sources.id(id);
    }

    if let Some(attr_list) = attr_list {
        for (name, value) in attr_list.iter() {
            if let Some(value) = AttrValue::from_json(&to_value(&value)?) {
                sources = sources.attribute(&name.str()?.to_string(), value);
            }
        }
    }

    if let Some(obj_ref_fn) = obj_ref_fn {
        sources = sources.object_ref(move |ctx: &Bound<'py, PyAny>| {
            let object = obj_ref_fn.call1((ctx,)).map_err(to_evaluation_error)?;
            if object.is_none() {
                return Ok(None);
            }
            let object: Box<dyn ObjectReference + 'py> = Box::new(PyObjectRef { object });
            Ok(Some(object))
        });
    }

    if let Some(attr_fn) = attr_fn {
        sources = sources.attribute_fn(move |ctx: &Bound<'py, PyAny>| {
            let hash = attr_fn.call1((ctx,)).map_err(to_evaluation_error)?;
            to_value(&hash).map_err(to_evaluation_error)
        });
    }

    let location = SourceLocation::new(line, character, &current_line);
    haml_attributes::generate_element_attributes(context, &sources, &location, Some(&policy))
        .map_err(|err| PyValueError::new_err(err.to_string()))
}

/// A Python module implemented in Rust, called from compiled Haml templates.
#[pymodule]
fn haml_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(escape_html, m)?)?;
    m.add_function(wrap_pyfunction!(preserve_whitespace, m)?)?;
    m.add_function(wrap_pyfunction!(indent_text, m)?)?;
    m.add_function(wrap_pyfunction!(template_error, m)?)?;
    m.add_function(wrap_pyfunction!(trim, m)?)?;
    m.add_function(wrap_pyfunction!(apply_filter, m)?)?;
    m.add_function(wrap_pyfunction!(generate_element_attributes, m)?)?;
    Ok(())
}
