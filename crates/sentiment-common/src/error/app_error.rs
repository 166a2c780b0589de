//! Application error types
//!
//! Failures that stop the process: bad configuration, an unreachable
//! database at startup, a classifier client that cannot be built, or a
//! listener that cannot be bound. Request-level failures never reach here.

use sentiment_core::ClassifierError;

/// Process-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Sentiment model client errors
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    // Listener errors
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

impl AppError {
    /// Get a short code for log fields
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Classifier(_) => "CLASSIFIER_ERROR",
            Self::Server(_) => "SERVER_ERROR",
        }
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
