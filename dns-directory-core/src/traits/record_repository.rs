//! Record persistence abstract Trait

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::types::{DnsRecord, RecordKey};

/// Record store Trait
///
/// Keeps at most one record per (name, type) key. Insertion order is
/// preserved and is the order `find_all` returns.
///
/// Platform implementation:
/// - In-memory: `InMemoryRecordRepository` (default, all platforms)
/// - Actix-Web: `SqliteRecordRepository` (`SeaORM`)
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Get all records in insertion order
    async fn find_all(&self) -> CoreResult<Vec<DnsRecord>>;

    /// Get the record under a key
    ///
    /// # Arguments
    /// * `key` - (name, type) identity
    async fn find_by_key(&self, key: &RecordKey) -> CoreResult<Option<DnsRecord>>;

    /// Insert a new record
    ///
    /// Fails with `RecordExists` when the key is already taken. The
    /// existence check and the insert happen atomically.
    ///
    /// # Arguments
    /// * `record` - Record data, timestamps already stamped
    async fn insert(&self, record: &DnsRecord) -> CoreResult<()>;

    /// Update the record under a key in place
    ///
    /// The record keeps its key, its position in `find_all` order and its
    /// `created_at`; `updated_at` is stamped by the implementation. Fails
    /// with `RecordNotFound` when no record exists under the key.
    ///
    /// # Arguments
    /// * `key` - (name, type) identity
    /// * `value` - new record data
    /// * `ttl` - new TTL in seconds
    async fn update(&self, key: &RecordKey, value: String, ttl: u32) -> CoreResult<DnsRecord>;

    /// Delete the record under a key
    ///
    /// Fails with `RecordNotFound` when no record exists under the key.
    ///
    /// # Arguments
    /// * `key` - (name, type) identity
    async fn delete(&self, key: &RecordKey) -> CoreResult<()>;
}

/// In-memory record store
///
/// Default implementation, available on all platforms. Contents are lost on
/// restart.
#[derive(Clone)]
pub struct InMemoryRecordRepository {
    records: Arc<RwLock<Vec<DnsRecord>>>,
}

impl InMemoryRecordRepository {
    /// Create a new empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn find_all(&self) -> CoreResult<Vec<DnsRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_key(&self, key: &RecordKey) -> CoreResult<Option<DnsRecord>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.matches_key(key))
            .cloned())
    }

    async fn insert(&self, record: &DnsRecord) -> CoreResult<()> {
        // Single write-lock scope: no other writer can slip in between the
        // duplicate check and the push.
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.matches_key(&record.key())) {
            return Err(CoreError::RecordExists {
                name: record.name.clone(),
                record_type: record.record_type,
            });
        }
        records.push(record.clone());
        Ok(())
    }

    async fn update(&self, key: &RecordKey, value: String, ttl: u32) -> CoreResult<DnsRecord> {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|r| r.matches_key(key)) else {
            return Err(CoreError::RecordNotFound {
                name: key.name.clone(),
                record_type: key.record_type,
            });
        };
        record.value = value;
        record.ttl = ttl;
        record.updated_at = chrono::Utc::now();
        Ok(record.clone())
    }

    async fn delete(&self, key: &RecordKey) -> CoreResult<()> {
        let mut records = self.records.write().await;
        let Some(index) = records.iter().position(|r| r.matches_key(key)) else {
            return Err(CoreError::RecordNotFound {
                name: key.name.clone(),
                record_type: key.record_type,
            });
        };
        records.remove(index);
        Ok(())
    }
}
