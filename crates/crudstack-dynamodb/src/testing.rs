//! Recording test double for the store boundary.
//!
//! The store trait exists so the adapter can be exercised without a real
//! table; this module provides the double used across the crate's own tests
//! and the workspace integration tests. It records every request it
//! receives, serves scripted query results, and can be configured to fail
//! every call.

use std::sync::Mutex;

use async_trait::async_trait;

use crudstack_model::Item;

use crate::store::{
    DeleteItemRequest, PutItemRequest, QueryRequest, StoreError, TableStore, UpdateItemRequest,
};

/// One recorded store invocation.
#[derive(Debug, Clone)]
pub enum RecordedCall {
    /// A put-item request.
    Put(PutItemRequest),
    /// A query request.
    Query(QueryRequest),
    /// An update-item request.
    Update(UpdateItemRequest),
    /// A delete-item request.
    Delete(DeleteItemRequest),
}

/// A [`TableStore`] that records requests instead of serving them.
#[derive(Debug, Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<RecordedCall>>,
    query_items: Vec<Item>,
    failure: Option<String>,
}

impl RecordingStore {
    /// A store that accepts every call and returns empty query results.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose queries return the given items, in order.
    #[must_use]
    pub fn with_query_items(items: Vec<Item>) -> Self {
        Self {
            query_items: items,
            ..Self::default()
        }
    }

    /// A store that fails every call with the given message.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Snapshot of every recorded call, in invocation order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("recording store poisoned").clone()
    }

    /// Number of store calls issued so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("recording store poisoned").len()
    }

    fn record(&self, call: RecordedCall) -> Result<(), StoreError> {
        self.calls
            .lock()
            .expect("recording store poisoned")
            .push(call);
        match &self.failure {
            Some(message) => Err(StoreError::Call(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TableStore for RecordingStore {
    async fn put_item(&self, request: PutItemRequest) -> Result<(), StoreError> {
        self.record(RecordedCall::Put(request))
    }

    async fn query(&self, request: QueryRequest) -> Result<Vec<Item>, StoreError> {
        self.record(RecordedCall::Query(request))?;
        Ok(self.query_items.clone())
    }

    async fn update_item(&self, request: UpdateItemRequest) -> Result<(), StoreError> {
        self.record(RecordedCall::Update(request))
    }

    async fn delete_item(&self, request: DeleteItemRequest) -> Result<(), StoreError> {
        self.record(RecordedCall::Delete(request))
    }
}
