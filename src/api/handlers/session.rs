use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::api::dtos::requests::{SessionListQuery, UpdateSessionStatusRequest};
use crate::domain::models::session::SessionStatus;
use crate::domain::services::validation::{DATE_FORMAT, SessionRequest};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.session_service.create_session(payload).await?;
    Ok(Json(created))
}

pub async fn list_sessions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SessionListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let parse = |field: &str, value: &Option<String>| -> Result<Option<NaiveDate>, AppError> {
        value
            .as_deref()
            .map(|raw| {
                NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
                    AppError::Validation(format!("invalid {field} '{raw}', expected YYYY-MM-DD"))
                })
            })
            .transpose()
    };

    let from = parse("from", &params.from)?;
    let to = parse("to", &params.to)?;

    let sessions = match (from, to) {
        (Some(from), Some(to)) => {
            state
                .session_repo
                .list_by_range(&params.trainer_id, from, to)
                .await?
        }
        (None, None) => state.session_repo.list_by_trainer(&params.trainer_id).await?,
        _ => {
            return Err(AppError::Validation(
                "from and to must be supplied together".to_string(),
            ));
        }
    };

    Ok(Json(sessions))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let session = state
        .session_repo
        .find_by_id(&session_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("session '{session_id}' not found")))?;
    Ok(Json(session))
}

pub async fn update_session_status(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    Json(payload): Json<UpdateSessionStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let status = SessionStatus::parse(&payload.status)
        .ok_or_else(|| AppError::Validation(format!("unknown status '{}'", payload.status)))?;

    let updated = state
        .session_service
        .update_status(&session_id, status)
        .await?;
    Ok(Json(updated))
}

pub async fn cancel_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let cancelled = state.session_service.cancel(&session_id).await?;
    Ok(Json(cancelled))
}
