use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::api::dtos::requests::SlotsQuery;
use crate::domain::services::validation::DATE_FORMAT;
use crate::error::AppError;
use crate::state::AppState;

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Path(trainer_id): Path<String>,
    Query(params): Query<SlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = NaiveDate::parse_from_str(&params.date, DATE_FORMAT).map_err(|_| {
        AppError::Validation(format!(
            "invalid date '{}', expected YYYY-MM-DD",
            params.date
        ))
    })?;

    let step = params.step.unwrap_or(state.config.slot_step_min);
    let slots = state
        .session_service
        .available_slots(&trainer_id, date, params.duration, step)
        .await?;

    Ok(Json(slots))
}
