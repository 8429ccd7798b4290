//! Declarative resource configuration.
//!
//! The configuration document describes one table-backed HTTP resource: the
//! allowed methods, the table name, the primary-key fields and their
//! operators, optional read filters and projections, and an optional
//! response shape. It is written in YAML (JSON is accepted too, being a
//! YAML subset) using the same section layout the original operator
//! documents use:
//!
//! ```yaml
//! Resources:
//!   Request:
//!     AllowedMethods: [GET, POST, PUT, DELETE]
//!   Database:
//!     TableName: users
//!     Keys:
//!       id:
//!         Operator: "="
//!     Filter: "#age > :age"
//!     FilterValues:
//!       age: "18"
//!     ProjectionCols: [id, username, age]
//!   Response:
//!     DataStruct: '[{"username": "", "age": ""}]'
//! ```
//!
//! The document is loaded once at process start, validated, and shared
//! read-only afterwards. Nothing in the request path mutates it.

use std::path::Path;

use indexmap::IndexMap;

use crate::error::ConfigError;
use crate::types::Operator;

/// Top-level resource configuration document.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResourceConfig {
    /// Optional document format version, carried through verbatim.
    pub template_format_version: Option<String>,
    /// Optional human-readable description of the resource.
    pub description: Option<String>,
    /// The request, database, and response sections.
    pub resources: Resources,
}

/// The `Resources` section grouping request, database, and response settings.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Resources {
    /// HTTP request settings.
    pub request: RequestSettings,
    /// DynamoDB table settings.
    pub database: DatabaseSettings,
    /// Response shaping settings.
    pub response: ResponseSettings,
}

/// HTTP methods the resource accepts.
///
/// The allow-list is kept exactly as the operator wrote it (raw strings), so
/// a request method outside the list is reported as "not allowed" rather
/// than "not supported" even when it is not a CRUD method at all.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RequestSettings {
    /// Methods the resource will dispatch.
    pub allowed_methods: Vec<String>,
}

impl RequestSettings {
    /// Returns `true` if the raw method string is in the allow-list.
    #[must_use]
    pub fn is_method_allowed(&self, method: &str) -> bool {
        self.allowed_methods.iter().any(|m| m == method)
    }
}

/// A single declared primary-key field.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KeySpec {
    /// Comparison operator for this field's key-condition clause.
    pub operator: Operator,
}

/// DynamoDB table settings for the resource.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DatabaseSettings {
    /// Target table name.
    pub table_name: String,
    /// Primary-key fields in declaration order.
    ///
    /// Declaration order is significant: key-condition clauses, name maps,
    /// and value maps are all emitted in this order.
    pub keys: IndexMap<String, KeySpec>,
    /// Optional filter expression template, used verbatim.
    pub filter: Option<String>,
    /// Literal values for the filter template's placeholders.
    pub filter_values: IndexMap<String, serde_json::Value>,
    /// Columns to project on reads; empty means the full item.
    pub projection_cols: Vec<String>,
    /// Encode request scalars as typed attributes (`N`, `BOOL`) instead of
    /// strings. Off by default to match the historical wire behavior.
    pub typed_values: bool,
}

impl DatabaseSettings {
    /// Returns `true` if `field` is one of the declared primary-key fields.
    #[must_use]
    pub fn is_key_field(&self, field: &str) -> bool {
        self.keys.contains_key(field)
    }
}

/// Response shaping settings.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResponseSettings {
    /// JSON template describing the expected shape of the response payload.
    pub data_struct: Option<String>,
}

impl ResponseSettings {
    /// Parse the declared response shape, if any.
    pub fn shape(&self) -> Result<Option<serde_json::Value>, ConfigError> {
        self.data_struct
            .as_deref()
            .map(|raw| serde_json::from_str(raw).map_err(ConfigError::from))
            .transpose()
    }
}

impl ResourceConfig {
    /// Load and validate a configuration document from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read(path.as_ref())?;
        let config = Self::from_slice(&data)?;
        tracing::info!(
            table = %config.resources.database.table_name,
            allowed_methods = ?config.resources.request.allowed_methods,
            "loaded resource configuration",
        );
        Ok(config)
    }

    /// Parse and validate a configuration document from raw bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_slice(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the adapter relies on.
    ///
    /// A configuration that fails validation must never serve requests:
    /// every violation here would otherwise surface as a malformed store
    /// request at some arbitrary later point.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let database = &self.resources.database;

        if database.table_name.is_empty() {
            return Err(ConfigError::MissingTableName);
        }
        if database.keys.is_empty() {
            return Err(ConfigError::NoKeys);
        }

        // Composite keys only compose with equality.
        if database.keys.len() >= 2 {
            for (field, spec) in &database.keys {
                if spec.operator != Operator::Eq {
                    return Err(ConfigError::NonEqualityKeyOperator {
                        field: field.clone(),
                        operator: spec.operator.symbol().to_owned(),
                    });
                }
            }
        }

        // Every placeholder in the filter template must have a declared value.
        if let Some(template) = database.filter.as_deref() {
            for name in placeholder_names(template) {
                if !database.filter_values.contains_key(&name) {
                    return Err(ConfigError::FilterValueNotDeclared { name });
                }
            }
        }

        // The response shape must at least be parseable JSON.
        self.resources.response.shape()?;

        Ok(())
    }
}

/// Extract the names referenced by `#name` / `:name` placeholders in an
/// expression template.
fn placeholder_names(template: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '#' && ch != ':' {
            continue;
        }
        let mut name = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_alphanumeric() || next == '_' {
                name.push(next);
                chars.next();
            } else {
                break;
            }
        }
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }

    names
}
