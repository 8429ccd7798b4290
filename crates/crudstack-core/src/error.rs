//! Configuration error type.

/// Errors raised while loading or validating the resource configuration.
///
/// All of these are fatal at startup: the process must not serve requests
/// with an incomplete or inconsistent configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration document could not be parsed.
    #[error("failed to parse configuration document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The response DataStruct template is not valid JSON.
    #[error("failed to parse response DataStruct template: {0}")]
    ShapeTemplate(#[from] serde_json::Error),

    /// The database section has no table name.
    #[error("configuration declares no table name")]
    MissingTableName,

    /// The database section declares no primary-key fields.
    #[error("configuration declares no primary-key fields")]
    NoKeys,

    /// A composite primary key declares a non-equality operator.
    #[error("key field '{field}' uses operator '{operator}': composite keys only support '='")]
    NonEqualityKeyOperator {
        /// The offending key field.
        field: String,
        /// The declared operator symbol.
        operator: String,
    },

    /// The filter template references a name with no declared filter value.
    #[error("filter template references '{name}' which is not declared in FilterValues")]
    FilterValueNotDeclared {
        /// The unresolved placeholder name.
        name: String,
    },
}
