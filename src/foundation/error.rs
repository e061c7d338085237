/// Convenience result alias used across the crate.
pub type TrafficResult<T> = Result<T, TrafficError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type for the animation core.
pub enum TrafficError {
    /// Input or model validation failure.
    #[error("validation error: {0}")]
    Validation(String),

    /// A traffic level name that is not `low`, `medium` or `high`.
    #[error("unknown traffic level: {0}")]
    UnknownLevel(String),

    /// Surface or rasterization failure.
    #[error("render error: {0}")]
    Render(String),

    /// Invalid or unreadable site configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrafficError {
    /// Build [`TrafficError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build [`TrafficError::UnknownLevel`].
    pub fn unknown_level(name: impl Into<String>) -> Self {
        Self::UnknownLevel(name.into())
    }

    /// Build [`TrafficError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build [`TrafficError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
