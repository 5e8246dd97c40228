//! Test helper module
//!
//! Mock implementations and factory methods shared by the unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::RecordService;
use crate::traits::RecordRepository;
use crate::types::{CreateRecordRequest, DnsRecord, RecordKey, RecordType};

// ===== MockRecordRepository =====

/// Faithful in-memory store with an injectable failure for exercising the
/// `StorageError` paths.
pub struct MockRecordRepository {
    records: RwLock<Vec<DnsRecord>>,
    /// If Some, every operation returns this as a `StorageError`
    error: RwLock<Option<String>>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            error: RwLock::new(None),
        }
    }

    pub async fn set_error(&self, err: Option<String>) {
        *self.error.write().await = err;
    }

    pub async fn stored_records(&self) -> Vec<DnsRecord> {
        self.records.read().await.clone()
    }

    async fn check_error(&self) -> CoreResult<()> {
        if let Some(ref msg) = *self.error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn find_all(&self) -> CoreResult<Vec<DnsRecord>> {
        self.check_error().await?;
        Ok(self.records.read().await.clone())
    }

    async fn find_by_key(&self, key: &RecordKey) -> CoreResult<Option<DnsRecord>> {
        self.check_error().await?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.matches_key(key))
            .cloned())
    }

    async fn insert(&self, record: &DnsRecord) -> CoreResult<()> {
        self.check_error().await?;
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
        self.check_error().await?;
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
        self.check_error().await?;
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

// ===== Factory methods =====

/// Create a `RecordService` over a mock store for tests
pub fn create_test_record_service() -> (RecordService, Arc<MockRecordRepository>) {
    let repo = Arc::new(MockRecordRepository::new());
    let service = RecordService::new(repo.clone());
    (service, repo)
}

/// A valid create request (A record) for tests to tweak
pub fn test_create_request(name: &str, record_type: RecordType) -> CreateRecordRequest {
    CreateRecordRequest {
        name: name.to_string(),
        record_type,
        value: "192.168.1.1".to_string(),
        ttl: 3600,
    }
}
