//! Error types for um-users.

/// Result type alias for um-users operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for um-users operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The create-user call answered with a status other than 201. Carries
    /// the observed status and the raw body for diagnostics.
    #[error("failed to create user: status {status}: {body}")]
    UserCreation { status: u16, body: String },

    /// Malformed 8-digit birth date integer.
    #[error("invalid birth date: {0}")]
    InvalidDate(String),

    /// Non-success response from a fetch operation.
    #[error("API error: status {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body could not be decoded into a user record.
    #[error("decode error: {0}")]
    Decode(String),

    /// Transport-level failure from the underlying client.
    #[error("client error: {0}")]
    Client(String),
}

impl From<um_client::Error> for Error {
    fn from(err: um_client::Error) -> Self {
        Error::with_source(ErrorKind::Client(err.to_string()), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Decode(err.to_string()), err)
    }
}
