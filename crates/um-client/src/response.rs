//! HTTP response outcome: status code plus buffered body.

/// Outcome of a request against the user-management API.
///
/// The body is fully buffered; callers decide success or failure from the
/// status code and consume the raw body for diagnostics or parsing.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    pub(crate) fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consume the response, returning the body.
    pub fn into_body(self) -> String {
        self.body
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns true if this is a 201 Created response.
    pub fn is_created(&self) -> bool {
        self.status == 201
    }
}
