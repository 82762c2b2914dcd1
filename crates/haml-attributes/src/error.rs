use thiserror::Error;

/// Error raised while evaluating a dynamic attribute source, e.g. an object
/// reference or an attribute hash function provided by the template.
#[derive(Debug, Error, PartialEq, Clone)]
#[error("{message}")]
pub struct EvaluationError {
    message: String,
}

impl EvaluationError {
    pub fn new(message: impl Into<String>) -> Self {
        EvaluationError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for EvaluationError {
    fn from(error: String) -> Self {
        EvaluationError::new(error)
    }
}

impl From<&str> for EvaluationError {
    fn from(error: &str) -> Self {
        EvaluationError::new(error)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AttributeError {
    /// A dynamic source failed, the message points at the template source location.
    #[error("{0}")]
    Evaluation(String),
    #[error("Invalid error policy: {0}")]
    InvalidErrorPolicy(String),
}
