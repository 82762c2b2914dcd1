//! # Element attribute generation
//!
//! Compiled templates call [`generate_element_attributes`] once per element, with all the
//! attribute sources of the element. The returned string is placed right after the tag name.
//!
//! ```text
//! %a#home.nav.active[user]{href: '/', data: {id: 7}}
//! ```
//!
//! Sources are merged in this order:
//!
//! 1. Static id, `#home`
//! 2. Static classes, `.nav.active`
//! 3. Static attributes, resolved by the compiler
//! 4. Object reference, `[user]`, evaluated against the render context
//! 5. Attribute hash, `{...}`, evaluated against the render context and flattened
//!
//! Only the two dynamic sources can fail. Their errors are formatted with the source
//! location of the element and handed to the [`ErrorHandler`].

use serde_json::Value;

use haml_runtime::template_error;

use crate::combine::{combine_attributes, AttributeMap};
use crate::error::{AttributeError, EvaluationError};
use crate::flatten::flatten_hash;
use crate::handler::{ErrorHandler, RaiseError};
use crate::object_ref::ObjectReference;
use crate::value::AttrValue;

pub type ObjectRefFn<'a, C> =
    dyn Fn(&C) -> Result<Option<Box<dyn ObjectReference + 'a>>, EvaluationError> + 'a;
pub type AttributeFn<'a, C> = dyn Fn(&C) -> Result<Value, EvaluationError> + 'a;

/// Position of the element in the template source, used in error messages
#[derive(Debug, PartialEq, Clone)]
pub struct SourceLocation<'a> {
    pub line: usize,
    pub character: usize,
    /// The full text of the source line
    pub current_line: &'a str,
}

impl<'a> SourceLocation<'a> {
    pub fn new(line: usize, character: usize, current_line: &'a str) -> Self {
        Self {
            line,
            character,
            current_line,
        }
    }

    pub fn error(&self, message: &str) -> String {
        template_error(self.line, self.character, self.current_line, message)
    }
}

/// All the attribute sources of a single element. `C` is the render context.
pub struct AttributeSources<'a, C: ?Sized> {
    pub id: Option<&'a str>,
    pub classes: &'a [&'a str],
    pub attributes: Vec<(String, AttrValue)>,
    pub object_ref: Option<Box<ObjectRefFn<'a, C>>>,
    pub attribute_fn: Option<Box<AttributeFn<'a, C>>>,
}

impl<'a, C: ?Sized> Default for AttributeSources<'a, C> {
    fn default() -> Self {
        Self {
            id: None,
            classes: &[],
            attributes: Vec::new(),
            object_ref: None,
            attribute_fn: None,
        }
    }
}

impl<'a, C: ?Sized> AttributeSources<'a, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn classes(mut self, classes: &'a [&'a str]) -> Self {
        self.classes = classes;
        self
    }

    pub fn attribute(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.attributes.push((name.to_string(), value.into()));
        self
    }

    pub fn object_ref<F>(mut self, object_ref: F) -> Self
    where
        F: Fn(&C) -> Result<Option<Box<dyn ObjectReference + 'a>>, EvaluationError> + 'a,
    {
        self.object_ref = Some(Box::new(object_ref));
        self
    }

    pub fn attribute_fn<F>(mut self, attribute_fn: F) -> Self
    where
        F: Fn(&C) -> Result<Value, EvaluationError> + 'a,
    {
        self.attribute_fn = Some(Box::new(attribute_fn));
        self
    }
}

/// Generates the attributes for the element by combining all the various sources together.
///
/// Without a `handler`, a failing dynamic source fails the whole call ([`RaiseError`]).
pub fn generate_element_attributes<C: ?Sized>(
    context: &C,
    sources: &AttributeSources<'_, C>,
    location: &SourceLocation<'_>,
    handler: Option<&dyn ErrorHandler>,
) -> Result<String, AttributeError> {
    let handler = handler.unwrap_or(&RaiseError);
    let mut attributes = AttributeMap::new();

    combine_attributes(&mut attributes, "id", sources.id.map(AttrValue::from));
    if sources.classes.first().is_some_and(|class| !class.is_empty()) {
        combine_attributes(&mut attributes, "class", Some(AttrValue::from(sources.classes)));
    }

    for (name, value) in &sources.attributes {
        combine_attributes(&mut attributes, name, Some(value.clone()));
    }

    if let Some(object_ref) = &sources.object_ref {
        if let Err(err) = merge_object_reference(&mut attributes, context, object_ref.as_ref()) {
            handler.handle(location.error(&format!(
                "Error evaluating object reference - {}",
                err
            )))?;
        }
    }

    if let Some(attribute_fn) = &sources.attribute_fn {
        if let Err(err) = merge_attribute_hash(&mut attributes, context, attribute_fn.as_ref()) {
            handler.handle(location.error(&format!(
                "Error evaluating attribute hash - {}",
                err
            )))?;
        }
    }

    Ok(attributes.render())
}

fn merge_object_reference<C: ?Sized>(
    attributes: &mut AttributeMap,
    context: &C,
    object_ref: &ObjectRefFn<'_, C>,
) -> Result<(), EvaluationError> {
    let object = match object_ref(context)? {
        Some(object) => object,
        None => return Ok(()),
    };

    let id = object.id()?;
    combine_attributes(attributes, "id", id.as_ref().and_then(AttrValue::from_json));

    let class = object.class()?;
    combine_attributes(attributes, "class", class.as_ref().and_then(AttrValue::from_json));
    Ok(())
}

fn merge_attribute_hash<C: ?Sized>(
    attributes: &mut AttributeMap,
    context: &C,
    attribute_fn: &AttributeFn<'_, C>,
) -> Result<(), EvaluationError> {
    let hash = attribute_fn(context)?;
    if hash.is_null() {
        return Ok(());
    }

    match flatten_hash(None, hash) {
        Value::Object(flattened) => {
            for (name, value) in &flattened {
                combine_attributes(attributes, name, AttrValue::from_json(value));
            }
        }
        other => log::debug!("Ignoring attribute hash that is not a mapping: {}", other),
    }
    Ok(())
}
