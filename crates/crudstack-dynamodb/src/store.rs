//! Narrow store boundary.
//!
//! The key-value store is an external collaborator reached through exactly
//! the four operation shapes the adapter needs: put, query, update, delete.
//! The production implementation ([`DynamoStore`]) wraps the AWS SDK client;
//! tests substitute recording doubles behind the same trait.
//!
//! [`DynamoStore`]: crate::client::DynamoStore

use async_trait::async_trait;
use indexmap::IndexMap;

use crudstack_model::{AttributeValue, Item};

/// Errors surfaced by a store implementation.
///
/// Never retried by the core; retry policy, if any, belongs to the hosting
/// environment.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store rejected or failed the call.
    #[error("store call failed: {0}")]
    Call(String),

    /// The store returned data the adapter cannot decode.
    #[error("store returned malformed data: {0}")]
    Malformed(String),
}

/// One unconditional put: insert or overwrite the full item.
#[derive(Debug, Clone, Default)]
pub struct PutItemRequest {
    /// Target table.
    pub table_name: String,
    /// The complete item to write.
    pub item: Item,
}

/// One query restricted by a key condition, optionally narrowed by a filter
/// and a projection.
#[derive(Debug, Clone, Default)]
pub struct QueryRequest {
    /// Target table.
    pub table_name: String,
    /// Compiled key-condition text.
    pub key_condition: String,
    /// Optional filter expression text.
    pub filter: Option<String>,
    /// Optional projection expression text.
    pub projection: Option<String>,
    /// Merged attribute-name placeholder map.
    pub names: IndexMap<String, String>,
    /// Merged attribute-value placeholder map.
    pub values: IndexMap<String, AttributeValue>,
}

/// One update keyed by the primary key, applying a compiled update
/// expression.
#[derive(Debug, Clone, Default)]
pub struct UpdateItemRequest {
    /// Target table.
    pub table_name: String,
    /// The compiled primary key.
    pub key: Item,
    /// Compiled update expression text, e.g. `"SET #name = :name"`.
    pub update_expression: String,
    /// Attribute-name placeholder map.
    pub names: IndexMap<String, String>,
    /// Attribute-value placeholder map.
    pub values: IndexMap<String, AttributeValue>,
}

/// One delete keyed solely by the primary key.
#[derive(Debug, Clone, Default)]
pub struct DeleteItemRequest {
    /// Target table.
    pub table_name: String,
    /// The compiled primary key.
    pub key: Item,
}

/// The four CRUD operation shapes the adapter issues against the store.
///
/// Implementations must be safe to share across concurrent invocations;
/// the adapter constructs one client at startup and reuses it.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Insert or overwrite one item.
    async fn put_item(&self, request: PutItemRequest) -> Result<(), StoreError>;

    /// Query items matching a compiled key condition.
    ///
    /// Returns the matching items in store order.
    async fn query(&self, request: QueryRequest) -> Result<Vec<Item>, StoreError>;

    /// Apply a compiled update expression to one item.
    async fn update_item(&self, request: UpdateItemRequest) -> Result<(), StoreError>;

    /// Remove one item by primary key.
    async fn delete_item(&self, request: DeleteItemRequest) -> Result<(), StoreError>;
}
