use thiserror::Error;

/// Failures raised by the pure avatar core.
///
/// `UnknownStyle` is kept apart from `InvalidArgument` so the HTTP layer can
/// answer it with a 404 instead of a generic client error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvatarError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown style: {0}")]
    UnknownStyle(String),
}

impl AvatarError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
