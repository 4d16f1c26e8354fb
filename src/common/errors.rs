//! Error types for strategy resolution

use thiserror::Error;

use crate::strategy::Context;

/// Result type alias using our StrategyError
pub type Result<T> = std::result::Result<T, StrategyError>;

/// Main error type for resolution and construction
#[derive(Error, Debug)]
pub enum StrategyError {
    /// No registered variant applies to the context
    #[error("No strategy found for context: {context}")]
    NoStrategyFound { context: Context },

    /// A variant was built without one of its required parameters
    #[error("Missing parameter `{parameter}` for {strategy}")]
    MissingParameter {
        strategy: &'static str,
        parameter: &'static str,
    },

    /// Malformed `name=value` parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// JSON serialization/deserialization errors
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StrategyError {
    /// Returns the unmatched context for a resolution failure
    pub fn context(&self) -> Option<&Context> {
        match self {
            StrategyError::NoStrategyFound { context } => Some(context),
            _ => None,
        }
    }
}
