/// Convenience result type used across the crate.
pub type GraffitiResult<T> = Result<T, GraffitiError>;

/// Top-level error taxonomy used by the rendering and export APIs.
#[derive(thiserror::Error, Debug)]
pub enum GraffitiError {
    /// The drawing surface (or its raster backing) could not be obtained.
    #[error("unsupported environment: {0}")]
    UnsupportedEnvironment(String),

    /// A background, style or effect pass failed while painting a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Encoding or offscreen allocation failed while exporting.
    #[error("export error: {0}")]
    Export(String),

    /// Invalid caller-provided data (colors, JSON requests, options).
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GraffitiError {
    /// Build a [`GraffitiError::UnsupportedEnvironment`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedEnvironment(msg.into())
    }

    /// Build a [`GraffitiError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GraffitiError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`GraffitiError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether this error should be surfaced with a "retry" action.
    ///
    /// Render and export failures are recoverable by re-issuing the same request; an
    /// unsupported environment is not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Render(_) | Self::Export(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
