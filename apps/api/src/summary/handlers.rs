//! Axum route handlers for the summary improvement API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::summary::improve_summary;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveRequest {
    #[serde(default)]
    pub text: String,
    pub summary_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImproveResponse {
    pub result: String,
}

/// POST /api/ai/ai-improve
pub async fn handle_improve(
    State(state): State<AppState>,
    payload: Result<Json<ImproveRequest>, JsonRejection>,
) -> Result<Json<ImproveResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("Text is required".to_string()));
    }

    let result = improve_summary(
        &request.text,
        request.summary_type.as_deref(),
        state.completion.as_ref(),
    )
    .await?;

    Ok(Json(ImproveResponse { result }))
}
