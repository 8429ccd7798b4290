//! Model types for crudstack.
//!
//! This crate provides the value types that cross the adapter's boundaries:
//! the typed-attribute wire representation ([`AttributeValue`]) and the codec
//! between it and plain JSON mappings, the inbound [`RequestEvent`], and the
//! [`ExecutionResult`] returned for every operation. DynamoDB's JSON protocol
//! makes the serde derives mostly trivial; `AttributeValue` is the one type
//! with hand-written serialization (single-key tagged objects).
// "DynamoDB" appears in most doc comments in this crate.
#![allow(clippy::doc_markdown)]

pub mod attribute_value;
pub mod codec;
pub mod request;
pub mod response;

pub use attribute_value::AttributeValue;
pub use codec::{AttributeCodec, Item, ValueMode};
pub use request::{AttributeMapping, RequestEvent};
pub use response::ExecutionResult;
