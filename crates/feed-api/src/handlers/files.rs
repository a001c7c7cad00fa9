//! File handlers
//!
//! Image upload into staging and raw file reads.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use feed_core::DomainError;
use feed_service::dto::{FileViewQuery, UploadResponse};
use feed_service::FileService;
use tracing::warn;

use crate::extractors::ApiQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// Multipart field holding the image
pub const UPLOAD_FIELD: &str = "file";

/// Stage an uploaded image
///
/// POST /file/upload-file (multipart, field `file`)
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut bytes = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!(error = %e, "Malformed multipart upload");
        DomainError::FileUploadFailed
    })? {
        if field.name() == Some(UPLOAD_FIELD) {
            let data = field.bytes().await.map_err(|e| {
                warn!(error = %e, "Failed to read upload body");
                DomainError::FileUploadFailed
            })?;
            bytes = Some(data.to_vec());
            break;
        }
    }

    let bytes = bytes.ok_or(DomainError::FileUploadFailed)?;
    let service = FileService::new(state.service_context());
    let temp_path = service.upload(bytes).await?;

    Ok(Json(UploadResponse { temp_path }))
}

/// Raw JPEG bytes of a stored file
///
/// GET /file/view?file_path
pub async fn view_file(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FileViewQuery>,
) -> ApiResult<impl IntoResponse> {
    let service = FileService::new(state.service_context());
    let bytes = service.read(&query.path()).await?;
    Ok(([(header::CONTENT_TYPE, "image/jpeg")], bytes))
}
