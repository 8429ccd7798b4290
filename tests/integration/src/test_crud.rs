//! End-to-end pipeline tests against the recording store double.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use http::StatusCode;
    use serde_json::json;

    use crudstack_dynamodb::testing::{RecordedCall, RecordingStore};
    use crudstack_model::{AttributeValue, Item, RequestEvent};

    use crate::handler_with;

    const USERS_CONFIG: &str = r#"
Resources:
  Request:
    AllowedMethods: [GET, POST, PUT, DELETE]
  Database:
    TableName: users
    Keys:
      id:
        Operator: "="
"#;

    const COMPOSITE_CONFIG: &str = r#"
Resources:
  Request:
    AllowedMethods: [GET]
  Database:
    TableName: orders
    Keys:
      email:
        Operator: "="
      order_id:
        Operator: "="
"#;

    const SHAPED_CONFIG: &str = r#"
Resources:
  Request:
    AllowedMethods: [GET]
  Database:
    TableName: users
    Keys:
      id:
        Operator: "="
  Response:
    DataStruct: '[{"username": "", "age": ""}]'
"#;

    fn stored_item(fields: &[(&str, &str)]) -> Item {
        fields
            .iter()
            .map(|(k, v)| ((*k).to_owned(), AttributeValue::S((*v).to_owned())))
            .collect()
    }

    #[tokio::test]
    async fn test_should_serve_get_with_single_key_end_to_end() {
        let store = Arc::new(RecordingStore::with_query_items(vec![stored_item(&[
            ("id", "42"),
            ("name", "Ana"),
        ])]));
        let handler = handler_with(USERS_CONFIG, Arc::clone(&store) as _);

        let result = handler
            .handle(&RequestEvent::new("GET", r#"{"id": "42"}"#))
            .await;

        assert_eq!(result.status_code, StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_str(result.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"id": "42", "name": "Ana"}));

        let calls = store.calls();
        assert_eq!(calls.len(), 1);
        let RecordedCall::Query(query) = &calls[0] else {
            panic!("expected query call");
        };
        assert_eq!(query.table_name, "users");
        assert_eq!(query.key_condition, "#id = :id");
        assert_eq!(query.names.get("#id").map(String::as_str), Some("id"));
        assert_eq!(
            query.values.get(":id"),
            Some(&AttributeValue::S("42".to_owned())),
        );
    }

    #[tokio::test]
    async fn test_should_reject_patch_without_store_call() {
        let store = Arc::new(RecordingStore::new());
        let handler = handler_with(USERS_CONFIG, Arc::clone(&store) as _);

        let result = handler
            .handle(&RequestEvent::new("PATCH", r#"{"id": "42"}"#))
            .await;

        assert_eq!(result.status_code, StatusCode::UNAUTHORIZED);
        assert_eq!(result.body.as_deref(), Some("PATCH method is not allowed"));
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_should_compile_composite_key_condition_in_declaration_order() {
        let store = Arc::new(RecordingStore::new());
        let handler = handler_with(COMPOSITE_CONFIG, Arc::clone(&store) as _);

        let result = handler
            .handle(&RequestEvent::new(
                "GET",
                r#"{"order_id": "9", "email": "ana@example.com"}"#,
            ))
            .await;

        assert_eq!(result.status_code, StatusCode::OK);
        let calls = store.calls();
        let RecordedCall::Query(query) = &calls[0] else {
            panic!("expected query call");
        };
        assert_eq!(
            query.key_condition,
            "#email = :email AND #order_id = :order_id",
        );
        assert_eq!(query.names.len(), 2);
        assert_eq!(query.values.len(), 2);
        let names: Vec<_> = query.names.keys().cloned().collect();
        assert_eq!(names, ["#email", "#order_id"]);
    }

    #[tokio::test]
    async fn test_should_reject_update_carrying_only_key_fields() {
        let store = Arc::new(RecordingStore::new());
        let handler = handler_with(USERS_CONFIG, Arc::clone(&store) as _);

        let result = handler
            .handle(&RequestEvent::new("PUT", r#"{"id": "42"}"#))
            .await;

        assert_eq!(result.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_should_not_deduplicate_repeated_create() {
        let store = Arc::new(RecordingStore::new());
        let handler = handler_with(USERS_CONFIG, Arc::clone(&store) as _);
        let event = RequestEvent::new("POST", r#"{"id": "42", "name": "Ana"}"#);

        assert_eq!(handler.handle(&event).await.status_code, StatusCode::CREATED);
        assert_eq!(handler.handle(&event).await.status_code, StatusCode::CREATED);

        let calls = store.calls();
        assert_eq!(calls.len(), 2);
        let (RecordedCall::Put(first), RecordedCall::Put(second)) = (&calls[0], &calls[1]) else {
            panic!("expected two put calls");
        };
        assert_eq!(first.item, second.item);
    }

    #[tokio::test]
    async fn test_should_fail_when_result_misses_declared_shape_fields() {
        let store = Arc::new(RecordingStore::with_query_items(vec![stored_item(&[
            ("id", "42"),
            ("username", "ana"),
        ])]));
        let handler = handler_with(SHAPED_CONFIG, Arc::clone(&store) as _);

        let result = handler
            .handle(&RequestEvent::new("GET", r#"{"id": "42"}"#))
            .await;

        assert_eq!(result.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(result.error.unwrap().contains("age"));
    }

    #[tokio::test]
    async fn test_should_attach_store_failure_message() {
        let store = Arc::new(RecordingStore::failing("ProvisionedThroughputExceeded"));
        let handler = handler_with(USERS_CONFIG, Arc::clone(&store) as _);

        let result = handler
            .handle(&RequestEvent::new("POST", r#"{"id": "42"}"#))
            .await;

        assert_eq!(result.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            result
                .error
                .unwrap()
                .contains("ProvisionedThroughputExceeded"),
        );
    }

    #[tokio::test]
    async fn test_should_delete_ignoring_non_key_attributes() {
        let store = Arc::new(RecordingStore::new());
        let handler = handler_with(USERS_CONFIG, Arc::clone(&store) as _);

        let result = handler
            .handle(&RequestEvent::new(
                "DELETE",
                r#"{"id": "42", "name": "ignored"}"#,
            ))
            .await;

        assert_eq!(result.status_code, StatusCode::OK);
        let calls = store.calls();
        let RecordedCall::Delete(req) = &calls[0] else {
            panic!("expected delete call");
        };
        assert_eq!(req.key.len(), 1);
    }
}
