//! HTTP handlers for the record directory API
//!
//! Handlers stay thin: parse the path, hand off to `RecordService`, pick the
//! success status. All failure mapping lives in [`crate::error`].

use actix_web::{HttpResponse, web};

use dns_directory_app::AppState;
use dns_directory_core::types::{CreateRecordRequest, RecordType, UpdateRecordRequest};

use crate::error::{ApiError, ApiResult};

/// Parse the `{type}` path segment into a [`RecordType`].
fn parse_type(raw: &str) -> Result<RecordType, ApiError> {
    raw.parse::<RecordType>().map_err(ApiError::from)
}

/// List all records in creation order
pub async fn list_records(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let records = state.record_service.list_records().await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Fetch the record under the (name, type) path key
pub async fn get_record(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (name, raw_type) = path.into_inner();
    let record_type = parse_type(&raw_type)?;

    let record = state.record_service.get_record(&name, record_type).await?;
    Ok(HttpResponse::Ok().json(record))
}

/// Create a record, responding 201 with the stored copy
pub async fn create_record(
    state: web::Data<AppState>,
    request: web::Json<CreateRecordRequest>,
) -> ApiResult<HttpResponse> {
    let record = state
        .record_service
        .create_record(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(record))
}

/// Replace value and TTL for the record under the path key
pub async fn update_record(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<UpdateRecordRequest>,
) -> ApiResult<HttpResponse> {
    let (name, raw_type) = path.into_inner();
    let record_type = parse_type(&raw_type)?;

    let record = state
        .record_service
        .update_record(&name, record_type, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(record))
}

/// Remove the record under the path key, responding 204
pub async fn delete_record(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (name, raw_type) = path.into_inner();
    let record_type = parse_type(&raw_type)?;

    state
        .record_service
        .delete_record(&name, record_type)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Liveness probe
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
