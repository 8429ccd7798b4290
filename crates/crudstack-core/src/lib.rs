//! Core configuration and shared vocabulary for crudstack.
//!
//! This crate provides the declarative resource configuration document that
//! drives the adapter (which HTTP methods are allowed, which fields compose
//! the table's primary key, which filters and projections apply to reads),
//! along with the method/operator vocabulary shared by every other crate.
//!
//! The configuration is loaded once at process start, validated, and then
//! shared read-only for the lifetime of the process.

mod config;
mod error;
mod types;

pub use config::{
    DatabaseSettings, KeySpec, RequestSettings, ResourceConfig, Resources, ResponseSettings,
};
pub use error::ConfigError;
pub use types::{Method, Operator};
