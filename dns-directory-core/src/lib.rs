//! DNS Directory Core Library
//!
//! Provides the authoritative record directory for the DNS Directory
//! service:
//! - Record types and field validation (`types`)
//! - Typed error taxonomy (`error`)
//! - Storage abstraction with a default in-memory store (`traits`)
//! - The CRUD operation surface (`services`)
//!
//! This library is platform-independent: storage is abstracted through the
//! `RecordRepository` trait, so the same service runs over the in-memory
//! store or a database-backed adapter.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::RecordService;
pub use traits::{InMemoryRecordRepository, RecordRepository};
