//! `RecordRepository` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Select, SqlErr,
};

use dns_directory_core::error::{CoreError, CoreResult};
use dns_directory_core::traits::RecordRepository;
use dns_directory_core::types::{DnsRecord, RecordKey, RecordType};

use super::SqliteStore;
use super::entity::record;

impl record::Model {
    /// Convert a `SeaORM` row model into a domain `DnsRecord`.
    ///
    /// String-backed columns are parsed into strongly typed values; a row
    /// that no longer parses is reported as storage corruption.
    fn into_record(self) -> CoreResult<DnsRecord> {
        let record_type = self.record_type.parse::<RecordType>().map_err(|_| {
            CoreError::StorageError(format!("Invalid type column: {}", self.record_type))
        })?;
        let ttl = u32::try_from(self.ttl)
            .map_err(|_| CoreError::StorageError(format!("Invalid ttl column: {}", self.ttl)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| CoreError::StorageError(format!("Invalid created_at: {e}")))?
            .with_timezone(&chrono::Utc);
        let updated_at = chrono::DateTime::parse_from_rfc3339(&self.updated_at)
            .map_err(|e| CoreError::StorageError(format!("Invalid updated_at: {e}")))?
            .with_timezone(&chrono::Utc);

        Ok(DnsRecord {
            name: self.name,
            record_type,
            value: self.value,
            ttl,
            created_at,
            updated_at,
        })
    }
}

/// Convert a domain `DnsRecord` into a `SeaORM` active model for insert.
///
/// The id column is left unset so `SQLite` assigns the next rowid.
fn record_to_active_model(record: &DnsRecord) -> record::ActiveModel {
    record::ActiveModel {
        name: Set(record.name.clone()),
        record_type: Set(record.record_type.to_string()),
        value: Set(record.value.clone()),
        ttl: Set(i64::from(record.ttl)),
        created_at: Set(record.created_at.to_rfc3339()),
        updated_at: Set(record.updated_at.to_rfc3339()),
        ..Default::default()
    }
}

/// Select the row under a (name, type) key.
fn select_by_key(key: &RecordKey) -> Select<record::Entity> {
    record::Entity::find()
        .filter(record::Column::Name.eq(&key.name))
        .filter(record::Column::RecordType.eq(key.record_type.as_str()))
}

#[async_trait]
impl RecordRepository for SqliteStore {
    async fn find_all(&self) -> CoreResult<Vec<DnsRecord>> {
        let rows = record::Entity::find()
            .order_by_asc(record::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query records: {e}")))?;

        rows.into_iter().map(record::Model::into_record).collect()
    }

    async fn find_by_key(&self, key: &RecordKey) -> CoreResult<Option<DnsRecord>> {
        let row = select_by_key(key)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query record: {e}")))?;

        row.map(record::Model::into_record).transpose()
    }

    async fn insert(&self, record: &DnsRecord) -> CoreResult<()> {
        record::Entity::insert(record_to_active_model(record))
            .exec(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => CoreError::RecordExists {
                    name: record.name.clone(),
                    record_type: record.record_type,
                },
                _ => CoreError::StorageError(format!("Failed to insert record: {e}")),
            })?;

        Ok(())
    }

    async fn update(&self, key: &RecordKey, value: String, ttl: u32) -> CoreResult<DnsRecord> {
        let row = select_by_key(key)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query record: {e}")))?
            .ok_or_else(|| CoreError::RecordNotFound {
                name: key.name.clone(),
                record_type: key.record_type,
            })?;

        let active = record::ActiveModel {
            id: Set(row.id),
            value: Set(value),
            ttl: Set(i64::from(ttl)),
            updated_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        // The row can disappear between the select and the update; SeaORM
        // reports that as RecordNotUpdated.
        let updated = active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => CoreError::RecordNotFound {
                name: key.name.clone(),
                record_type: key.record_type,
            },
            _ => CoreError::StorageError(format!("Failed to update record: {e}")),
        })?;

        updated.into_record()
    }

    async fn delete(&self, key: &RecordKey) -> CoreResult<()> {
        let row = select_by_key(key)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query record: {e}")))?;

        match row {
            Some(m) => {
                m.delete(&self.db)
                    .await
                    .map_err(|e| CoreError::StorageError(format!("Failed to delete record: {e}")))?;
                Ok(())
            }
            None => Err(CoreError::RecordNotFound {
                name: key.name.clone(),
                record_type: key.record_type,
            }),
        }
    }
}
