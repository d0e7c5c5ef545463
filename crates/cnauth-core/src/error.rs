//! Error types for override parameter building.

/// Errors raised while reading a credential form or building its parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthParamError {
    /// Prefix cannot address any field.
    #[error("invalid prefix {prefix:?}: {reason}")]
    InvalidPrefix { prefix: String, reason: String },

    /// A credential field the form is expected to render is absent.
    #[error("missing form field: {field}")]
    MissingField { field: String },

    /// Form snapshot could not be read.
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// Form snapshot content is malformed.
    #[error("invalid form snapshot: {message}")]
    InvalidSnapshot { message: String },
}

impl AuthParamError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidPrefix { .. } => 1,
            Self::MissingField { .. } => 2,
            Self::InvalidSnapshot { .. } => 2,
            Self::Io { .. } => 3,
        }
    }

    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

impl From<serde_yaml::Error> for AuthParamError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::InvalidSnapshot {
            message: err.to_string(),
        }
    }
}

/// Result type for override parameter operations.
pub type AuthParamResult<T> = Result<T, AuthParamError>;
