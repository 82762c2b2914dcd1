use std::str::FromStr;

use crate::error::AttributeError;

/// Decides what happens when a dynamic attribute source fails.
///
/// The handler receives the formatted error message, including the template source
/// location. Returning `Err` aborts the render, returning `Ok` drops the failed
/// source and carries on with the remaining ones.
pub trait ErrorHandler {
    fn handle(&self, message: String) -> Result<(), AttributeError>;
}

/// Fails the render. This is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct RaiseError;

impl ErrorHandler for RaiseError {
    fn handle(&self, message: String) -> Result<(), AttributeError> {
        Err(AttributeError::Evaluation(message))
    }
}

/// Logs the error as a warning and continues rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogError;

impl ErrorHandler for LogError {
    fn handle(&self, message: String) -> Result<(), AttributeError> {
        log::warn!("{}", message);
        Ok(())
    }
}

impl<F> ErrorHandler for F
where
    F: Fn(String) -> Result<(), AttributeError>,
{
    fn handle(&self, message: String) -> Result<(), AttributeError> {
        self(message)
    }
}

/// Error handling selected by name, e.g. from the `on_error` option of a render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    #[default]
    Raise,
    Log,
}

impl FromStr for ErrorPolicy {
    type Err = AttributeError;

    fn from_str(policy: &str) -> Result<Self, Self::Err> {
        match policy {
            "raise" => Ok(ErrorPolicy::Raise),
            "log" => Ok(ErrorPolicy::Log),
            _ => Err(AttributeError::InvalidErrorPolicy(policy.to_string())),
        }
    }
}

impl ErrorHandler for ErrorPolicy {
    fn handle(&self, message: String) -> Result<(), AttributeError> {
        match self {
            ErrorPolicy::Raise => RaiseError.handle(message),
            ErrorPolicy::Log => LogError.handle(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_raise() {
        let result = RaiseError.handle("boom".to_string());
        assert_eq!(result, Err(AttributeError::Evaluation("boom".to_string())));
    }

    #[test]
    fn test_log() {
        assert_eq!(LogError.handle("boom".to_string()), Ok(()));
    }

    #[test]
    fn test_closure_handler() {
        let seen = RefCell::new(Vec::new());
        let handler = |message: String| -> Result<(), AttributeError> {
            seen.borrow_mut().push(message);
            Ok(())
        };
        handler.handle("first".to_string()).unwrap();
        handler.handle("second".to_string()).unwrap();
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("raise".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Raise));
        assert_eq!("log".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Log));
        assert_eq!(
            "ignore".parse::<ErrorPolicy>(),
            Err(AttributeError::InvalidErrorPolicy("ignore".to_string()))
        );
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::Raise);
    }

    #[test]
    fn test_policy_handles() {
        assert!(ErrorPolicy::Raise.handle("boom".to_string()).is_err());
        assert!(ErrorPolicy::Log.handle("boom".to_string()).is_ok());
    }
}
