//! CRUD cycle against a live local DynamoDB container.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use aws_sdk_dynamodb::types::{
        AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
    };
    use http::StatusCode;
    use serde_json::json;

    use crudstack_dynamodb::DynamoStore;
    use crudstack_model::RequestEvent;

    use crate::{dynamodb_client, handler_with, test_table_name};

    /// Create a table with a single string hash key named `id`.
    async fn create_id_table(client: &aws_sdk_dynamodb::Client, table_name: &str) {
        client
            .create_table()
            .table_name(table_name)
            .key_schema(
                KeySchemaElement::builder()
                    .attribute_name("id")
                    .key_type(KeyType::Hash)
                    .build()
                    .unwrap(),
            )
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name("id")
                    .attribute_type(ScalarAttributeType::S)
                    .build()
                    .unwrap(),
            )
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .unwrap_or_else(|e| panic!("failed to create table {table_name}: {e}"));
    }

    fn table_config(table_name: &str) -> String {
        format!(
            r#"
Resources:
  Request:
    AllowedMethods: [GET, POST, PUT, DELETE]
  Database:
    TableName: {table_name}
    Keys:
      id:
        Operator: "="
"#,
        )
    }

    #[tokio::test]
    #[ignore = "requires a local DynamoDB container (DYNAMO_ENDPOINT)"]
    async fn test_should_run_full_crud_cycle_against_local_table() {
        let client = dynamodb_client();
        let table_name = test_table_name("crud");
        create_id_table(&client, &table_name).await;

        let store = Arc::new(DynamoStore::from_client(client.clone()));
        let handler = handler_with(&table_config(&table_name), store);

        // Create.
        let result = handler
            .handle(&RequestEvent::new(
                "POST",
                r#"{"id": "42", "name": "Ana", "age": "30"}"#,
            ))
            .await;
        assert_eq!(result.status_code, StatusCode::CREATED);

        // Read back the single item, unwrapped.
        let result = handler
            .handle(&RequestEvent::new("GET", r#"{"id": "42"}"#))
            .await;
        assert_eq!(result.status_code, StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_str(result.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], json!("Ana"));

        // Update one non-key attribute.
        let result = handler
            .handle(&RequestEvent::new(
                "PUT",
                r#"{"id": "42", "name": "Beatriz"}"#,
            ))
            .await;
        assert_eq!(result.status_code, StatusCode::OK);

        let result = handler
            .handle(&RequestEvent::new("GET", r#"{"id": "42"}"#))
            .await;
        let body: serde_json::Value =
            serde_json::from_str(result.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], json!("Beatriz"));
        assert_eq!(body["age"], json!("30"));

        // Delete, then confirm the read collapses to null.
        let result = handler
            .handle(&RequestEvent::new("DELETE", r#"{"id": "42"}"#))
            .await;
        assert_eq!(result.status_code, StatusCode::OK);

        let result = handler
            .handle(&RequestEvent::new("GET", r#"{"id": "42"}"#))
            .await;
        assert_eq!(result.body.as_deref(), Some("null"));

        let _ = client.delete_table().table_name(&table_name).send().await;
    }

    #[tokio::test]
    #[ignore = "requires a local DynamoDB container (DYNAMO_ENDPOINT)"]
    async fn test_should_overwrite_existing_item_on_repeated_create() {
        let client = dynamodb_client();
        let table_name = test_table_name("overwrite");
        create_id_table(&client, &table_name).await;

        let store = Arc::new(DynamoStore::from_client(client.clone()));
        let handler = handler_with(&table_config(&table_name), store);

        handler
            .handle(&RequestEvent::new("POST", r#"{"id": "1", "name": "first"}"#))
            .await;
        handler
            .handle(&RequestEvent::new("POST", r#"{"id": "1", "name": "second"}"#))
            .await;

        let result = handler
            .handle(&RequestEvent::new("GET", r#"{"id": "1"}"#))
            .await;
        let body: serde_json::Value =
            serde_json::from_str(result.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], json!("second"));

        let _ = client.delete_table().table_name(&table_name).send().await;
    }
}
