//! Execution result returned for every operation.

use http::StatusCode;

/// The outcome of one operation: a status code, an optional serialized
/// payload, and an optional failure detail.
///
/// This is the sole value returned across the core boundary for every
/// operation, success or failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// HTTP-equivalent status code.
    pub status_code: StatusCode,
    /// JSON-serialized payload, or a plain-text failure message.
    pub body: Option<String>,
    /// Failure detail, present only for failed operations.
    pub error: Option<String>,
}

impl ExecutionResult {
    /// A successful result with no payload.
    #[must_use]
    pub fn ok(status_code: StatusCode) -> Self {
        Self {
            status_code,
            body: None,
            error: None,
        }
    }

    /// A successful result carrying a serialized payload.
    #[must_use]
    pub fn with_body(status_code: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: Some(body.into()),
            error: None,
        }
    }

    /// A failed result.
    ///
    /// The message is carried both as the response body (so callers see the
    /// diagnostic) and in the error field.
    #[must_use]
    pub fn failure(status_code: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status_code,
            body: Some(message.clone()),
            error: Some(message),
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status_code.is_success()
    }
}
