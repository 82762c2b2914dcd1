//! # Haml element attributes
//!
//! Merges the attribute sources of a Haml element (static id and classes, static
//! attributes, an object reference and an attribute hash) into one HTML attribute string.
//!
//! ## Example
//!
//! ```rust
//! use haml_attributes::{generate_element_attributes, AttributeSources, SourceLocation};
//! use serde_json::json;
//!
//! struct Context {
//!     user_id: u32,
//! }
//!
//! let sources = AttributeSources::new()
//!     .id("profile")
//!     .classes(&["card"])
//!     .attribute_fn(|ctx: &Context| Ok(json!({"data": {"user": ctx.user_id}})));
//! let location = SourceLocation::new(1, 1, "%div#profile.card{data: {user: user_id}}");
//!
//! let html = generate_element_attributes(&Context { user_id: 7 }, &sources, &location, None).unwrap();
//! assert_eq!(html, " id=\"profile\" class=\"card\" data-user=\"7\"");
//! ```

pub mod combine;
pub mod error;
pub mod flatten;
pub mod generate;
pub mod handler;
pub mod object_ref;
pub mod value;

// Re-export the types that users need
pub use combine::{attr_value, combine_attributes, has_value, AttributeMap};
pub use error::{AttributeError, EvaluationError};
pub use flatten::{flatten_hash, is_hash};
pub use generate::{generate_element_attributes, AttributeFn, AttributeSources, ObjectRefFn, SourceLocation};
pub use handler::{ErrorHandler, ErrorPolicy, LogError, RaiseError};
pub use object_ref::{Accessor, AccessorObject, ObjectReference};
pub use value::AttrValue;
