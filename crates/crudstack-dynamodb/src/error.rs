//! Adapter error taxonomy.
//!
//! Every failure in the request path is one of these variants; nothing in
//! the core panics for a client-caused condition. Request-class errors map
//! to 4xx status codes, store and serialization failures to 5xx.

use http::StatusCode;

use crudstack_model::ExecutionResult;

use crate::store::StoreError;

/// Errors produced while processing one request.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The method is not in the resource's allow-list.
    #[error("{method} method is not allowed")]
    MethodNotAllowed {
        /// The raw request method.
        method: String,
    },

    /// The method is allow-listed but maps to no CRUD operation.
    #[error("{method} method is not supported")]
    MethodNotSupported {
        /// The raw request method.
        method: String,
    },

    /// A declared primary-key field is absent from the request payload.
    #[error("required key field '{field}' is missing from the request")]
    MissingKeyField {
        /// The missing field name.
        field: String,
    },

    /// An update request carries no non-key attributes. An empty `SET`
    /// clause is invalid and must never reach the store.
    #[error("update request contains no attributes outside the primary key")]
    EmptyUpdate,

    /// The request body is not a JSON object.
    #[error("failed to parse request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// The result set does not match the declared response shape.
    #[error("result does not match the declared response shape: {0}")]
    ShapeMismatch(String),

    /// The store call failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AdapterError {
    /// The HTTP-equivalent status code for this failure.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed { .. } => StatusCode::UNAUTHORIZED,
            Self::MethodNotSupported { .. } | Self::MissingKeyField { .. } | Self::EmptyUpdate => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidBody(_) | Self::ShapeMismatch(_) | Self::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<AdapterError> for ExecutionResult {
    fn from(err: AdapterError) -> Self {
        Self::failure(err.status_code(), err.to_string())
    }
}
