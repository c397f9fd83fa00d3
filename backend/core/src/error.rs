use thiserror::Error;

/// Top-level error type for the RelayForge runtime.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("authentication failed: {0}")]
    AuthFailed(&'static str),

    #[error("invalid mode: {0}")]
    InvalidMode(String),

    #[error("generation failed ({provider}): {message}")]
    GenerationFailed { provider: String, message: String },

    #[error("malformed event: {0}")]
    MalformedEvent(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
