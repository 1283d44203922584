//! Axum route handlers for resume upload and parsing.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::resume::{parse_resume_text, ResumeRecord};
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
const RESUME_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    pub extracted_data: ResumeRecord,
    pub file_name: String,
}

struct UploadedFile {
    file_name: String,
    content_type: String,
    data: Bytes,
}

/// POST /api/upload
///
/// Extracts text from the uploaded PDF/DOCX and parses it into a `ResumeRecord`.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let file = read_resume_field(multipart)
        .await?
        .ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    info!(
        "Received upload '{}' ({}, {} bytes)",
        file.file_name,
        file.content_type,
        file.data.len()
    );

    let UploadedFile {
        file_name,
        content_type,
        data,
    } = file;
    let text = tokio::task::spawn_blocking(move || extract_text(&data, &content_type))
        .await
        .map_err(|e| {
            AppError::UnprocessableEntity(format!("Failed to read uploaded document: {e}"))
        })??;

    let extracted_data = parse_resume_text(&text, state.completion.as_ref()).await?;

    Ok(Json(UploadResponse {
        message: "Resume parsed successfully".to_string(),
        extracted_data,
        file_name,
    }))
}

async fn read_resume_field(mut multipart: Multipart) -> Result<Option<UploadedFile>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Invalid multipart body", e))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read upload", e))?;
        return Ok(Some(UploadedFile {
            file_name,
            content_type,
            data,
        }));
    }
    Ok(None)
}

/// Body-limit overruns surface as multipart errors; keep them distinct from malformed bodies.
fn multipart_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("Upload exceeds the maximum allowed size: {err}"))
    } else {
        AppError::Validation(format!("{context}: {err}"))
    }
}
