//! Common types and utilities shared across tabledb.
//!
//! - Configuration constants and [`DatabaseConfig`]
//! - Error types
//! - Identifiers ([`RowId`])

pub mod config;
pub mod error;
mod row_id;

pub use config::DatabaseConfig;
pub use error::{Error, Result};
pub use row_id::RowId;
