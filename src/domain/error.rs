use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
pub enum AppError {
    UnsupportedFormat(String),
    LoadError(String),
    EmptyInput(String),
    InsightFailure(String),
    ConfigError(String),
    ValidationError(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UnsupportedFormat(msg) => write!(f, "Unsupported format: {}", msg),
            AppError::LoadError(msg) => write!(f, "Load error: {}", msg),
            AppError::EmptyInput(msg) => write!(f, "Empty input: {}", msg),
            AppError::InsightFailure(msg) => write!(f, "Insight failure: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
