//! Configuration-to-query compiler and CRUD operation handlers.
//!
//! This crate is the adapter's core: given the declarative resource
//! configuration and an incoming request payload, it deterministically
//! produces key-condition, filter, projection, and update expressions,
//! dispatches to the right CRUD operation, issues exactly one store call,
//! and shapes the result into an [`ExecutionResult`].
//!
//! The store itself sits behind the narrow [`TableStore`] trait; the AWS
//! SDK client lives in [`client`] and test doubles implement the same trait.
//!
//! [`ExecutionResult`]: crudstack_model::ExecutionResult
#![allow(clippy::doc_markdown)]

pub mod classify;
pub mod client;
pub mod error;
pub mod expression;
pub mod handler;
mod ops;
pub mod router;
pub mod shape;
pub mod store;
pub mod testing;

pub use client::DynamoStore;
pub use error::AdapterError;
pub use expression::CompiledExpression;
pub use handler::{RequestContext, ResourceHandler};
pub use router::MethodRouter;
pub use shape::ResponseShaper;
pub use store::{
    DeleteItemRequest, PutItemRequest, QueryRequest, StoreError, TableStore, UpdateItemRequest,
};
