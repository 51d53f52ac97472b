//! Error types for chart code blocks.

use rw_charts::ValidationError;

/// Reason a chart code block was left in place.
#[derive(Debug, thiserror::Error)]
pub enum BlockError {
    /// Block text is not valid JSON.
    #[error("invalid chart JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// JSON parsed but is not a usable chart configuration.
    #[error("invalid chart configuration: {0}")]
    Invalid(#[from] ValidationError),
}
