//! Platform-agnostic application bootstrap for the DNS Directory service.
//!
//! Provides `AppState` (service container) and `AppStateBuilder` (storage
//! adapter injection).

pub mod adapters;

use std::sync::Arc;

use dns_directory_core::services::RecordService;
use dns_directory_core::traits::{InMemoryRecordRepository, RecordRepository};

/// Platform-agnostic application state.
///
/// Holds the service layer. Every frontend constructs this once at startup
/// via `AppStateBuilder` and shares it across request handlers.
pub struct AppState {
    /// Record directory service
    pub record_service: Arc<RecordService>,
}

/// Builder for constructing `AppState` with a platform-specific store.
///
/// # Optional
/// - `record_repository` — defaults to `InMemoryRecordRepository`
pub struct AppStateBuilder {
    record_repository: Option<Arc<dyn RecordRepository>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            record_repository: None,
        }
    }

    #[must_use]
    pub fn record_repository(mut self, repo: Arc<dyn RecordRepository>) -> Self {
        self.record_repository = Some(repo);
        self
    }

    /// Build the `AppState`.
    #[must_use]
    pub fn build(self) -> AppState {
        let record_repository = self
            .record_repository
            .unwrap_or_else(|| Arc::new(InMemoryRecordRepository::new()));

        AppState {
            record_service: Arc::new(RecordService::new(record_repository)),
        }
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
