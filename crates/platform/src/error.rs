//! DriveHub client errors

use thiserror::Error;

/// Result type used across the crate.
pub type Result<T> = anyhow::Result<T, Error>;

/// Status reported when no HTTP response was received.
pub const NO_RESPONSE: u16 = 0;

/// Domain level error type returned while talking to the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The request never produced a response (connectivity, DNS, TLS, ...).
    #[error("code: 0, description: transport_error {0}")]
    Transport(String),

    /// The backend answered with a status outside the 2xx range.
    #[error("code: {0}, description: unexpected_status")]
    Status(u16),

    /// The backend answered with something other than JSON.
    #[error("code: {status}, description: invalid_content_type {content_type}")]
    ContentType { status: u16, content_type: String },

    /// The body could not be decoded into the expected schema.
    #[error("code: {status}, description: invalid_format {message}")]
    Decode { status: u16, message: String },

    /// Client configuration is missing or malformed.
    #[error("code: 0, description: invalid_config {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns the HTTP status associated with the error, or [`NO_RESPONSE`]
    /// when the backend was never reached.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Status(status)
            | Self::ContentType { status, .. }
            | Self::Decode { status, .. } => *status,
            Self::Transport(_) | Self::InvalidConfig(_) => NO_RESPONSE,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        let chain = err.chain().map(ToString::to_string).collect::<Vec<_>>().join(" -> ");

        // if type is Error, keep the variant and fold in the added context
        if let Some(inner) = err.downcast_ref::<Self>() {
            tracing::debug!("Error: {err}, caused by: {inner}");

            return match inner {
                Self::Transport(_) => Self::Transport(chain),
                Self::InvalidConfig(_) => Self::InvalidConfig(chain),
                Self::Status(_) | Self::ContentType { .. } | Self::Decode { .. } => inner.clone(),
            };
        }

        // anything else never produced a response
        Self::Transport(chain)
    }
}
