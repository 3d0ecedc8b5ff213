use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::dtos::requests::{CreateTrainerRequest, UpdateTrainerRequest};
use crate::api::dtos::responses::TrainerResponse;
use crate::domain::models::schedule::{self, NormalizedSchedule, WeekSchedule};
use crate::domain::models::trainer::{NewTrainerParams, Trainer, TrainerStatus};
use crate::error::AppError;
use crate::state::AppState;

fn normalize_hours(trainer_label: &str, raw: Option<&Value>) -> (WeekSchedule, Vec<String>) {
    let normalized = match raw {
        Some(raw) => schedule::normalize(raw),
        None => NormalizedSchedule::Clean(WeekSchedule::default()),
    };
    if let NormalizedSchedule::Degraded(_, warnings) = &normalized {
        warn!(
            trainer = trainer_label,
            ?warnings,
            "working hours input degraded to default schedule"
        );
    }
    normalized.into_parts()
}

pub async fn create_trainer(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTrainerRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.hourly_rate_cents < 0 {
        return Err(AppError::Validation(
            "hourly_rate_cents must not be negative".to_string(),
        ));
    }

    let (working_hours, schedule_warnings) =
        normalize_hours(&payload.name, payload.working_hours.as_ref());

    let trainer = Trainer::new(NewTrainerParams {
        name: payload.name,
        email: payload.email,
        specialty: payload.specialty,
        bio: payload.bio,
        hourly_rate_cents: payload.hourly_rate_cents,
        working_hours,
    });

    let created = state.trainer_repo.create(&trainer).await?;
    info!(trainer_id = %created.id, "trainer created");

    Ok(Json(TrainerResponse {
        trainer: created,
        schedule_warnings,
    }))
}

pub async fn list_trainers(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let trainers = state.trainer_repo.list().await?;
    Ok(Json(trainers))
}

pub async fn get_trainer(
    State(state): State<Arc<AppState>>,
    Path(trainer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let trainer = state
        .trainer_repo
        .find_by_id(&trainer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("trainer '{trainer_id}' not found")))?;
    Ok(Json(trainer))
}

pub async fn update_trainer(
    State(state): State<Arc<AppState>>,
    Path(trainer_id): Path<String>,
    Json(payload): Json<UpdateTrainerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut trainer = state
        .trainer_repo
        .find_by_id(&trainer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("trainer '{trainer_id}' not found")))?;

    if let Some(name) = payload.name {
        trainer.name = name;
    }
    if let Some(email) = payload.email {
        trainer.email = email;
    }
    if let Some(specialty) = payload.specialty {
        trainer.specialty = Some(specialty);
    }
    if let Some(bio) = payload.bio {
        trainer.bio = Some(bio);
    }
    if let Some(rate) = payload.hourly_rate_cents {
        if rate < 0 {
            return Err(AppError::Validation(
                "hourly_rate_cents must not be negative".to_string(),
            ));
        }
        trainer.hourly_rate_cents = rate;
    }
    if let Some(raw) = payload.status {
        let status = TrainerStatus::parse(&raw)
            .ok_or_else(|| AppError::Validation(format!("unknown trainer status '{raw}'")))?;
        trainer.status = status;
    }

    let updated = state.trainer_repo.update(&trainer).await?;
    info!(trainer_id = %updated.id, "trainer updated");
    Ok(Json(updated))
}

/// A trainer with sessions on file is only soft-deleted; the sessions stay
/// and keep referencing it by id.
pub async fn delete_trainer(
    State(state): State<Arc<AppState>>,
    Path(trainer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut trainer = state
        .trainer_repo
        .find_by_id(&trainer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("trainer '{trainer_id}' not found")))?;

    if state
        .session_repo
        .has_sessions_for_trainer(&trainer_id)
        .await?
    {
        trainer.status = TrainerStatus::Deleted;
        state.trainer_repo.update(&trainer).await?;
        info!(trainer_id = %trainer_id, "trainer soft-deleted, sessions reference it");
        Ok(Json(
            serde_json::json!({ "status": "deleted", "mode": "soft" }),
        ))
    } else {
        state.trainer_repo.delete(&trainer_id).await?;
        info!(trainer_id = %trainer_id, "trainer deleted");
        Ok(Json(
            serde_json::json!({ "status": "deleted", "mode": "hard" }),
        ))
    }
}

pub async fn get_working_hours(
    State(state): State<Arc<AppState>>,
    Path(trainer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let trainer = state
        .trainer_repo
        .find_by_id(&trainer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("trainer '{trainer_id}' not found")))?;
    Ok(Json(trainer.working_hours))
}

pub async fn update_working_hours(
    State(state): State<Arc<AppState>>,
    Path(trainer_id): Path<String>,
    Json(raw): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let mut trainer = state
        .trainer_repo
        .find_by_id(&trainer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("trainer '{trainer_id}' not found")))?;

    let (working_hours, warnings) = normalize_hours(&trainer.name, Some(&raw));
    trainer.working_hours = working_hours;

    let updated = state.trainer_repo.update(&trainer).await?;
    info!(trainer_id = %updated.id, degraded = !warnings.is_empty(), "working hours updated");

    Ok(Json(serde_json::json!({
        "working_hours": updated.working_hours,
        "warnings": warnings,
    })))
}
