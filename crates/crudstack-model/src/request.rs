//! Inbound request event.

use std::collections::HashMap;

/// Request-scoped mapping of field names to JSON values, parsed from the
/// request body. Created per request and discarded with the response.
pub type AttributeMapping = serde_json::Map<String, serde_json::Value>;

/// One inbound request: an HTTP method, a JSON body, and optional query
/// parameters.
///
/// How the event arrives (API Gateway, test harness) is the hosting layer's
/// concern; the core only sees this value.
#[derive(Debug, Clone, Default)]
pub struct RequestEvent {
    /// Raw HTTP method string, e.g. `"GET"`.
    pub http_method: String,
    /// Raw JSON request body.
    pub body: String,
    /// Query string parameters.
    pub query_parameters: HashMap<String, String>,
}

impl RequestEvent {
    /// Create an event from a method and body, with no query parameters.
    #[must_use]
    pub fn new(http_method: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            body: body.into(),
            query_parameters: HashMap::new(),
        }
    }

    /// Parse the body into an attribute mapping.
    ///
    /// The body must be a JSON object; anything else (including an empty
    /// body) is a serialization failure.
    pub fn attribute_mapping(&self) -> Result<AttributeMapping, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// The update mode selected by the `mode` query parameter.
    ///
    /// Defaults to `"SET"` when the parameter is absent.
    #[must_use]
    pub fn update_mode(&self) -> &str {
        self.query_parameters
            .get("mode")
            .map_or("SET", String::as_str)
    }
}
