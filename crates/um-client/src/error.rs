//! Error types for um-client.

/// Result type alias for um-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for um-client operations.
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

    /// Returns true if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication { .. })
    }

    /// Returns true if this is a configuration error.
    pub fn is_config_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Config(_))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Network-level failure while sending a request or reading its body.
    /// I/O errors, interruptions, and timeouts are not distinguished by
    /// kind; the target URL and underlying cause carry the context.
    #[error("request to {url} failed")]
    Transport { url: String },

    /// The auth endpoint answered with a non-success status. The body is
    /// the raw error text received instead of a credential.
    #[error("authentication failed: status {status}: {body}")]
    Authentication { status: u16, body: String },

    /// Missing or invalid configuration (absent variable, malformed base URL).
    #[error("configuration error: {0}")]
    Config(String),

    /// Form body serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("invalid base URL: {}", err)), err)
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}
