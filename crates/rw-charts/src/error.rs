//! Error types for chart validation and rendering.

/// Reason a parsed value was rejected as a chart configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// Value is not a JSON object.
    #[error("chart configuration must be an object")]
    NotAnObject,

    /// Neither `kind` nor `type` is present.
    #[error("chart configuration has no kind")]
    MissingKind,

    /// Kind is present but not one of the supported kinds.
    #[error("invalid chart type: {0}")]
    UnsupportedKind(String),

    /// `data.datasets` is missing or not an array.
    #[error("missing or invalid data.datasets")]
    MissingDatasets,
}

/// Construction failure reported by a charting backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("chart construction failed: {message}")]
pub struct BackendError {
    /// Backend-provided description.
    pub message: String,
}

impl BackendError {
    /// Create a backend error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error during a render pass.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// No drawing surface with this id exists in the container.
    #[error("canvas element with id {0} not found")]
    SurfaceNotFound(String),

    /// The backend refused to build the chart.
    #[error("failed to create chart {id}")]
    Backend {
        /// Chart id the render was for.
        id: String,
        /// Underlying backend failure.
        #[source]
        source: BackendError,
    },
}
