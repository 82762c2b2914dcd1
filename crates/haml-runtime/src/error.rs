use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RuntimeError {
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
}
