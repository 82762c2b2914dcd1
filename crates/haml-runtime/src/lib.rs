pub mod error;
pub mod escape;
pub mod filters;
pub mod format;
pub mod whitespace;

// Re-export the functions that generated templates call
pub use error::RuntimeError;
pub use escape::escape_html;
pub use filters::{filter, Filter};
pub use format::{indent_text, template_error, trim_chars};
pub use whitespace::preserve_whitespace;
