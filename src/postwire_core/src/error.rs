use thiserror::Error;

pub const INTERNAL_ERROR_STATUS: u16 = 500;
pub const VALIDATION_ERROR_STATUS: u16 = 400;

/// Failure of a send operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// Malformed input, rejected before any network call.
    #[error("{message}")]
    Validation { message: String },

    /// The provider rejected the request or answered with its error shape.
    #[error("{message}")]
    Provider { status: u16, message: String },

    #[error("Failed to send email: {0}")]
    Transport(String),
}

impl SendError {
    pub fn validation(message: impl Into<String>) -> Self {
        SendError::Validation {
            message: message.into(),
        }
    }

    pub fn provider(status: Option<u16>, message: impl Into<String>) -> Self {
        SendError::Provider {
            status: status.unwrap_or(INTERNAL_ERROR_STATUS),
            message: message.into(),
        }
    }

    pub fn transport(error: impl std::fmt::Display) -> Self {
        SendError::Transport(error.to_string())
    }

    /// HTTP-style status code reported to the host.
    pub fn status_code(&self) -> u16 {
        match self {
            SendError::Validation { .. } => VALIDATION_ERROR_STATUS,
            SendError::Provider { status, .. } => *status,
            SendError::Transport(_) => INTERNAL_ERROR_STATUS,
        }
    }
}

impl From<serde_json::Error> for SendError {
    fn from(error: serde_json::Error) -> Self {
        SendError::transport(error)
    }
}
