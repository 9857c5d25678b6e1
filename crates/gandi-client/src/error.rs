use thiserror::Error;
use std::io;

/// Client-specific error type.
///
/// Errors fall into two tiers. Transport errors ([`ClientError::Transport`],
/// [`ClientError::InvalidResponse`]) mean the exchange itself broke and the
/// outcome on the service is unknown. [`ClientError::Remote`] means the service
/// answered with a well-formed envelope whose code was not 200.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Service returned code {code}{}", message_suffix(.message))]
    Remote {
        code: i64,
        message: Option<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// True for failures of the exchange itself (connection, timeout, non-JSON body).
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_) | ClientError::InvalidResponse(_))
    }

    /// True when the service answered with a non-200 envelope.
    pub fn is_remote(&self) -> bool {
        matches!(self, ClientError::Remote { .. })
    }

    /// Envelope code for remote failures.
    pub fn code(&self) -> Option<i64> {
        match self {
            ClientError::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default()
}

/// Client-specific result type
pub type Result<T> = std::result::Result<T, ClientError>;

/// Only used for errors raised while a request is in flight. A request that
/// cannot be built (e.g. the host does not form a valid URL) fails at request
/// time like any other unreachable endpoint, so it lands in the transport tier.
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::InvalidResponse(err.to_string())
        } else if err.is_builder() {
            ClientError::Transport(format!("Invalid request: {}", err))
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::InvalidResponse(format!("Body is not a JSON envelope: {}", err))
    }
}
