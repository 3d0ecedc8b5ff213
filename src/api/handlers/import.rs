use axum::{Json, extract::State, response::IntoResponse};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::ImportValidateRequest;
use crate::api::dtos::responses::ImportValidationResponse;
use crate::domain::services::import;
use crate::error::AppError;
use crate::state::AppState;

/// Advisory only: the rows are checked against trainer/client records, never
/// against the session store, and nothing is committed.
pub async fn validate_import(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ImportValidateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let trainers: HashMap<_, _> = state
        .trainer_repo
        .list()
        .await?
        .into_iter()
        .map(|t| (t.id.clone(), t))
        .collect();
    let clients: HashMap<_, _> = state
        .client_repo
        .list()
        .await?
        .into_iter()
        .map(|c| (c.id.clone(), c))
        .collect();

    let issues = import::validate_rows(&payload.rows, &trainers, &clients);
    info!(
        rows = payload.rows.len(),
        issues = issues.len(),
        "import batch validated"
    );

    Ok(Json(ImportValidationResponse {
        rows_checked: payload.rows.len(),
        issues,
    }))
}
