//! Method validation and dispatch.
//!
//! Every request passes through the same short progression: received,
//! validated against the allow-list, resolved to a CRUD operation, then
//! dispatched. There is no state between requests; each invocation starts
//! from scratch.

use crudstack_core::{Method, RequestSettings};

use crate::error::AdapterError;

/// Validates the request method and resolves it to a CRUD operation.
///
/// Validation happens on the raw method string against the configured
/// allow-list, so a method outside the list short-circuits with "not
/// allowed" before any operation mapping. An allow-listed string that maps
/// to no CRUD operation is "not supported".
#[derive(Debug, Clone)]
pub struct MethodRouter {
    allowed_methods: Vec<String>,
}

impl MethodRouter {
    /// Build a router from the request settings.
    #[must_use]
    pub fn new(request: &RequestSettings) -> Self {
        Self {
            allowed_methods: request.allowed_methods.clone(),
        }
    }

    /// Returns `true` if the raw method string is allow-listed.
    #[must_use]
    pub fn is_allowed(&self, method: &str) -> bool {
        self.allowed_methods.iter().any(|m| m == method)
    }

    /// Validate and resolve a raw method string.
    pub fn resolve(&self, method: &str) -> Result<Method, AdapterError> {
        if !self.is_allowed(method) {
            return Err(AdapterError::MethodNotAllowed {
                method: method.to_owned(),
            });
        }

        Method::from_http_method(method).ok_or_else(|| AdapterError::MethodNotSupported {
            method: method.to_owned(),
        })
    }
}
