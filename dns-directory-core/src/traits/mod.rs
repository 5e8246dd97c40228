//! Abstract trait definitions module

mod record_repository;

pub use record_repository::{InMemoryRecordRepository, RecordRepository};
