//! AWS SDK implementation of the store boundary.
//!
//! Constructed once at process start and shared across invocations. The
//! session honors the `DYNAMO_ENDPOINT` environment variable so local
//! DynamoDB containers can stand in for the real service, matching the
//! usual local-development setup.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::types::AttributeValue as SdkAttributeValue;

use crudstack_model::{AttributeValue, Item};

use crate::store::{
    DeleteItemRequest, PutItemRequest, QueryRequest, StoreError, TableStore, UpdateItemRequest,
};

/// DynamoDB-backed [`TableStore`].
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: aws_sdk_dynamodb::Client,
}

impl DynamoStore {
    /// Build a store from AWS environment configuration.
    ///
    /// If `DYNAMO_ENDPOINT` is set, the client is pointed at that endpoint
    /// instead of the regional service.
    pub async fn connect() -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Ok(endpoint) = std::env::var("DYNAMO_ENDPOINT") {
            tracing::info!(endpoint = %endpoint, "using local DynamoDB endpoint");
            loader = loader.endpoint_url(endpoint);
        }

        let config = loader.load().await;
        Self {
            client: aws_sdk_dynamodb::Client::new(&config),
        }
    }

    /// Wrap an already-configured SDK client.
    #[must_use]
    pub fn from_client(client: aws_sdk_dynamodb::Client) -> Self {
        Self { client }
    }
}

/// Convert a model attribute value into the SDK representation.
fn to_sdk_value(value: &AttributeValue) -> SdkAttributeValue {
    match value {
        AttributeValue::S(s) => SdkAttributeValue::S(s.clone()),
        AttributeValue::N(n) => SdkAttributeValue::N(n.clone()),
        AttributeValue::Bool(b) => SdkAttributeValue::Bool(*b),
        AttributeValue::Null(b) => SdkAttributeValue::Null(*b),
        AttributeValue::L(items) => SdkAttributeValue::L(items.iter().map(to_sdk_value).collect()),
        AttributeValue::M(fields) => SdkAttributeValue::M(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), to_sdk_value(v)))
                .collect(),
        ),
    }
}

/// Convert an SDK attribute value back into the model representation.
///
/// Binary and set attributes have no JSON mapping in this adapter; an item
/// carrying one is reported as malformed rather than silently dropped.
fn from_sdk_value(value: &SdkAttributeValue) -> Result<AttributeValue, StoreError> {
    match value {
        SdkAttributeValue::S(s) => Ok(AttributeValue::S(s.clone())),
        SdkAttributeValue::N(n) => Ok(AttributeValue::N(n.clone())),
        SdkAttributeValue::Bool(b) => Ok(AttributeValue::Bool(*b)),
        SdkAttributeValue::Null(b) => Ok(AttributeValue::Null(*b)),
        SdkAttributeValue::L(items) => Ok(AttributeValue::L(
            items.iter().map(from_sdk_value).collect::<Result<_, _>>()?,
        )),
        SdkAttributeValue::M(fields) => Ok(AttributeValue::M(
            fields
                .iter()
                .map(|(k, v)| Ok((k.clone(), from_sdk_value(v)?)))
                .collect::<Result<_, StoreError>>()?,
        )),
        other => Err(StoreError::Malformed(format!(
            "unsupported attribute type in result: {other:?}",
        ))),
    }
}

fn to_sdk_item(item: &Item) -> HashMap<String, SdkAttributeValue> {
    item.iter()
        .map(|(k, v)| (k.clone(), to_sdk_value(v)))
        .collect()
}

fn from_sdk_item(item: &HashMap<String, SdkAttributeValue>) -> Result<Item, StoreError> {
    item.iter()
        .map(|(k, v)| Ok((k.clone(), from_sdk_value(v)?)))
        .collect()
}

fn to_sdk_names(names: &indexmap::IndexMap<String, String>) -> Option<HashMap<String, String>> {
    if names.is_empty() {
        None
    } else {
        Some(names.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

fn to_sdk_values(
    values: &indexmap::IndexMap<String, AttributeValue>,
) -> Option<HashMap<String, SdkAttributeValue>> {
    if values.is_empty() {
        None
    } else {
        Some(
            values
                .iter()
                .map(|(k, v)| (k.clone(), to_sdk_value(v)))
                .collect(),
        )
    }
}

#[async_trait]
impl TableStore for DynamoStore {
    async fn put_item(&self, request: PutItemRequest) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&request.table_name)
            .set_item(Some(to_sdk_item(&request.item)))
            .send()
            .await
            .map_err(|e| StoreError::Call(e.into_service_error().to_string()))?;
        Ok(())
    }

    async fn query(&self, request: QueryRequest) -> Result<Vec<Item>, StoreError> {
        let output = self
            .client
            .query()
            .table_name(&request.table_name)
            .key_condition_expression(&request.key_condition)
            .set_filter_expression(request.filter.clone())
            .set_projection_expression(request.projection.clone())
            .set_expression_attribute_names(to_sdk_names(&request.names))
            .set_expression_attribute_values(to_sdk_values(&request.values))
            .send()
            .await
            .map_err(|e| StoreError::Call(e.into_service_error().to_string()))?;

        output.items().iter().map(from_sdk_item).collect()
    }

    async fn update_item(&self, request: UpdateItemRequest) -> Result<(), StoreError> {
        self.client
            .update_item()
            .table_name(&request.table_name)
            .set_key(Some(to_sdk_item(&request.key)))
            .update_expression(&request.update_expression)
            .set_expression_attribute_names(to_sdk_names(&request.names))
            .set_expression_attribute_values(to_sdk_values(&request.values))
            .send()
            .await
            .map_err(|e| StoreError::Call(e.into_service_error().to_string()))?;
        Ok(())
    }

    async fn delete_item(&self, request: DeleteItemRequest) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&request.table_name)
            .set_key(Some(to_sdk_item(&request.key)))
            .send()
            .await
            .map_err(|e| StoreError::Call(e.into_service_error().to_string()))?;
        Ok(())
    }
}
