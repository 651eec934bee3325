use std::fmt;

/// Result type for triagedesk-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when talking to the backend.
///
/// `Transport` and `Malformed` are both transport-class failures (the call
/// never produced a usable envelope); `Api` means the backend answered with
/// a well-formed envelope carrying `success: false`.
#[derive(Debug)]
pub enum Error {
    /// Network unreachable, connection refused, timeout
    Transport(reqwest::Error),

    /// Response body was not the expected envelope
    Malformed(serde_json::Error),

    /// Application-level failure reported by the backend
    Api(String),
}

impl Error {
    /// True for failures where the backend never answered meaningfully
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Malformed(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "Network error: {}", err),
            Error::Malformed(err) => write!(f, "Malformed response: {}", err),
            Error::Api(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::Malformed(err) => Some(err),
            Error::Api(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Malformed(err)
    }
}
