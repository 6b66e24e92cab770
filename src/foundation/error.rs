/// Result alias used throughout the crate.
pub type WalletQrResult<T> = Result<T, WalletQrError>;

/// Error kinds surfaced by classification, configuration and rendering.
#[derive(thiserror::Error, Debug)]
pub enum WalletQrError {
    /// The classifier rejected the input string.
    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),

    /// A style configuration cannot be rendered (bad numeric fields, data too long, bad map).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A render stage failed. The stage's own error is kept as the source.
    #[error("generation failed: {0}")]
    Generation(#[source] Box<WalletQrError>),

    /// A required resource (logo, font) was unavailable while running in strict mode.
    #[error("resource error: {0}")]
    Resource(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, typically IO or image codec failures with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WalletQrError {
    /// Build an [`WalletQrError::InvalidAddress`].
    pub fn invalid_address(msg: impl Into<String>) -> Self {
        Self::InvalidAddress(msg.into())
    }

    /// Build an [`WalletQrError::InvalidConfig`].
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build an [`WalletQrError::Resource`].
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }

    /// Build an [`WalletQrError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Wrap any error as a generation failure. Already-wrapped errors are returned unchanged.
    pub fn generation(cause: WalletQrError) -> Self {
        match cause {
            Self::Generation(_) => cause,
            other => Self::Generation(Box::new(other)),
        }
    }

    /// The innermost error kind, looking through [`WalletQrError::Generation`].
    pub fn cause(&self) -> &WalletQrError {
        match self {
            Self::Generation(inner) => inner.cause(),
            other => other,
        }
    }
}

impl From<serde_json::Error> for WalletQrError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
