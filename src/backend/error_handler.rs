//! Centralized error classification

use crate::backend::error::BackendError;
use crate::logging::LogLevel;

/// Maps backend failures to the level they are logged at.
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level
    pub fn classify_error(&self, error: &BackendError) -> LogLevel {
        match (error.status(), error) {
            // Server errors - the backend may still be loading its model
            (Some(500..=599), _) => LogLevel::Warn,

            // Client errors - wrong base URL or a missing data file
            (Some(400..=499), _) => LogLevel::Error,

            // Network issues - backend not started yet
            (_, BackendError::Reqwest(_)) => LogLevel::Warn,

            // The response does not have the shape we plot
            (_, BackendError::Decode { .. }) => LogLevel::Error,
            (_, BackendError::InvalidUrl(_)) => LogLevel::Error,

            (_, BackendError::Http { .. }) => LogLevel::Warn,
        }
    }
}
