//! Record directory service
//!
//! Validates input and drives the record store. Single entry point for every
//! API surface; holds no state of its own, so it is cheap to share.

use std::sync::Arc;

use chrono::Utc;

use crate::error::{CoreError, CoreResult};
use crate::traits::RecordRepository;
use crate::types::{CreateRecordRequest, DnsRecord, RecordKey, RecordType, UpdateRecordRequest};

/// Record directory service
pub struct RecordService {
    repository: Arc<dyn RecordRepository>,
}

impl RecordService {
    /// Create a record service instance
    #[must_use]
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    // ===== CRUD operations =====

    /// List all records in creation order
    pub async fn list_records(&self) -> CoreResult<Vec<DnsRecord>> {
        self.repository.find_all().await
    }

    /// Get the record under (name, type)
    ///
    /// Fails with `RecordNotFound` when no record exists under the key.
    pub async fn get_record(&self, name: &str, record_type: RecordType) -> CoreResult<DnsRecord> {
        let key = RecordKey::new(name.to_string(), record_type);
        self.repository
            .find_by_key(&key)
            .await?
            .ok_or(CoreError::RecordNotFound {
                name: key.name,
                record_type,
            })
    }

    /// Create a record
    ///
    /// Fails with `ValidationError` on bad fields, `RecordExists` when the
    /// (name, type) key is already taken.
    pub async fn create_record(&self, request: CreateRecordRequest) -> CoreResult<DnsRecord> {
        // 1. Validate fields
        request.validate()?;

        // 2. Stamp timestamps (created == updated on a fresh record)
        let now = Utc::now();
        let record = DnsRecord {
            name: request.name,
            record_type: request.record_type,
            value: request.value,
            ttl: request.ttl,
            created_at: now,
            updated_at: now,
        };

        // 3. Insert; the duplicate check is atomic inside the repository
        self.repository.insert(&record).await?;

        Ok(record)
    }

    /// Update the record under (name, type) in place
    ///
    /// Only `value` and `ttl` change; the key and `created_at` are kept and
    /// `updated_at` is refreshed. Fails with `ValidationError` on bad fields,
    /// `RecordNotFound` when no record exists under the key.
    pub async fn update_record(
        &self,
        name: &str,
        record_type: RecordType,
        request: UpdateRecordRequest,
    ) -> CoreResult<DnsRecord> {
        request.validate()?;

        let key = RecordKey::new(name.to_string(), record_type);
        self.repository
            .update(&key, request.value, request.ttl)
            .await
    }

    /// Delete the record under (name, type)
    ///
    /// Fails with `RecordNotFound` when no record exists under the key.
    pub async fn delete_record(&self, name: &str, record_type: RecordType) -> CoreResult<()> {
        let key = RecordKey::new(name.to_string(), record_type);
        self.repository.delete(&key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_record_service, test_create_request};

    #[tokio::test]
    async fn create_record_success() {
        let (svc, _) = create_test_record_service();

        let record = svc
            .create_record(test_create_request("example.com", RecordType::A))
            .await
            .unwrap();

        assert_eq!(record.name, "example.com");
        assert_eq!(record.record_type, RecordType::A);
        assert_eq!(record.value, "192.168.1.1");
        assert_eq!(record.ttl, 3600);
        assert_eq!(record.created_at, record.updated_at);

        // Persisted, not just echoed
        let fetched = svc.get_record("example.com", RecordType::A).await.unwrap();
        assert_eq!(fetched.value, "192.168.1.1");
    }

    #[tokio::test]
    async fn create_record_duplicate_key_conflict() {
        let (svc, _) = create_test_record_service();

        svc.create_record(test_create_request("example.com", RecordType::A))
            .await
            .unwrap();

        let mut second = test_create_request("example.com", RecordType::A);
        second.value = "10.0.0.1".to_string();
        let result = svc.create_record(second).await;

        assert!(matches!(
            result,
            Err(CoreError::RecordExists { ref name, record_type: RecordType::A }) if name == "example.com"
        ));

        // First record untouched
        let stored = svc.get_record("example.com", RecordType::A).await.unwrap();
        assert_eq!(stored.value, "192.168.1.1");
    }

    #[tokio::test]
    async fn create_record_same_name_different_type() {
        let (svc, _) = create_test_record_service();

        svc.create_record(CreateRecordRequest {
            name: "a.com".to_string(),
            record_type: RecordType::Ns,
            value: "ns1.a.com".to_string(),
            ttl: 86400,
        })
        .await
        .unwrap();
        svc.create_record(CreateRecordRequest {
            name: "a.com".to_string(),
            record_type: RecordType::Cname,
            value: "b.com".to_string(),
            ttl: 300,
        })
        .await
        .unwrap();

        assert_eq!(svc.list_records().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn create_record_invalid_name_rejected_before_storage() {
        let (svc, repo) = create_test_record_service();

        let result = svc
            .create_record(test_create_request("", RecordType::A))
            .await;

        assert!(matches!(result, Err(CoreError::ValidationError(_))));
        assert!(repo.stored_records().await.is_empty());
    }

    #[tokio::test]
    async fn create_record_storage_failure_propagates() {
        let (svc, repo) = create_test_record_service();
        repo.set_error(Some("disk full".to_string())).await;

        let result = svc
            .create_record(test_create_request("example.com", RecordType::A))
            .await;

        assert!(matches!(result, Err(CoreError::StorageError(_))));
    }

    #[tokio::test]
    async fn list_records_in_creation_order() {
        let (svc, _) = create_test_record_service();

        svc.create_record(test_create_request("b.example.com", RecordType::A))
            .await
            .unwrap();
        svc.create_record(test_create_request("a.example.com", RecordType::A))
            .await
            .unwrap();

        let records = svc.list_records().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "b.example.com");
        assert_eq!(records[1].name, "a.example.com");
    }

    #[tokio::test]
    async fn get_record_not_found() {
        let (svc, _) = create_test_record_service();

        let result = svc.get_record("ghost.example.com", RecordType::Cname).await;

        assert!(matches!(
            result,
            Err(CoreError::RecordNotFound { ref name, record_type: RecordType::Cname })
                if name == "ghost.example.com"
        ));
    }

    #[tokio::test]
    async fn update_record_changes_value_and_ttl_only() {
        let (svc, _) = create_test_record_service();

        let created = svc
            .create_record(test_create_request("example.com", RecordType::A))
            .await
            .unwrap();

        let updated = svc
            .update_record(
                "example.com",
                RecordType::A,
                UpdateRecordRequest {
                    value: "10.0.0.42".to_string(),
                    ttl: 60,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "example.com");
        assert_eq!(updated.record_type, RecordType::A);
        assert_eq!(updated.value, "10.0.0.42");
        assert_eq!(updated.ttl, 60);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_record_not_found() {
        let (svc, _) = create_test_record_service();

        let result = svc
            .update_record(
                "ghost.example.com",
                RecordType::A,
                UpdateRecordRequest {
                    value: "10.0.0.1".to_string(),
                    ttl: 60,
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::RecordNotFound { .. })));
    }

    #[tokio::test]
    async fn update_record_invalid_value_rejected() {
        let (svc, _) = create_test_record_service();

        svc.create_record(test_create_request("example.com", RecordType::A))
            .await
            .unwrap();

        let result = svc
            .update_record(
                "example.com",
                RecordType::A,
                UpdateRecordRequest {
                    value: "   ".to_string(),
                    ttl: 60,
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::ValidationError(_))));

        // Stored record untouched
        let stored = svc.get_record("example.com", RecordType::A).await.unwrap();
        assert_eq!(stored.value, "192.168.1.1");
    }

    #[tokio::test]
    async fn delete_record_success() {
        let (svc, _) = create_test_record_service();

        svc.create_record(test_create_request("example.com", RecordType::A))
            .await
            .unwrap();
        svc.delete_record("example.com", RecordType::A)
            .await
            .unwrap();

        let result = svc.get_record("example.com", RecordType::A).await;
        assert!(matches!(result, Err(CoreError::RecordNotFound { .. })));
        assert!(svc.list_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_record_not_found() {
        let (svc, _) = create_test_record_service();

        let result = svc.delete_record("ghost.example.com", RecordType::Ns).await;

        assert!(matches!(result, Err(CoreError::RecordNotFound { .. })));
    }

    #[tokio::test]
    async fn full_record_lifecycle() {
        let (svc, _) = create_test_record_service();

        svc.create_record(test_create_request("example.com", RecordType::A))
            .await
            .unwrap();

        let mut conflicting = test_create_request("example.com", RecordType::A);
        conflicting.value = "10.0.0.1".to_string();
        conflicting.ttl = 60;
        assert!(matches!(
            svc.create_record(conflicting).await,
            Err(CoreError::RecordExists { .. })
        ));

        svc.update_record(
            "example.com",
            RecordType::A,
            UpdateRecordRequest {
                value: "10.0.0.1".to_string(),
                ttl: 60,
            },
        )
        .await
        .unwrap();

        let records = svc.list_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value, "10.0.0.1");
        assert_eq!(records[0].ttl, 60);

        svc.delete_record("example.com", RecordType::A)
            .await
            .unwrap();
        assert!(svc.list_records().await.unwrap().is_empty());
    }
}
