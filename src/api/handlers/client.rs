use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateClientRequest, UpdateClientRequest};
use crate::domain::models::client::Client;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_client(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(trainer_id) = payload.assigned_trainer_id.as_deref()
        && state.trainer_repo.find_by_id(trainer_id).await?.is_none()
    {
        return Err(AppError::Validation(format!(
            "assigned trainer '{trainer_id}' does not exist"
        )));
    }

    let client = Client::new(payload.name, payload.email, payload.assigned_trainer_id);
    let created = state.client_repo.create(&client).await?;
    info!(client_id = %created.id, "client created");
    Ok(Json(created))
}

pub async fn list_clients(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let clients = state.client_repo.list().await?;
    Ok(Json(clients))
}

pub async fn get_client(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let client = state
        .client_repo
        .find_by_id(&client_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("client '{client_id}' not found")))?;
    Ok(Json(client))
}

pub async fn update_client(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<String>,
    Json(payload): Json<UpdateClientRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut client = state
        .client_repo
        .find_by_id(&client_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("client '{client_id}' not found")))?;

    if let Some(name) = payload.name {
        client.name = name;
    }
    if let Some(email) = payload.email {
        client.email = email;
    }
    if let Some(trainer_id) = payload.assigned_trainer_id {
        if trainer_id.is_empty() {
            client.assigned_trainer_id = None;
        } else {
            if state.trainer_repo.find_by_id(&trainer_id).await?.is_none() {
                return Err(AppError::Validation(format!(
                    "assigned trainer '{trainer_id}' does not exist"
                )));
            }
            client.assigned_trainer_id = Some(trainer_id);
        }
    }

    let updated = state.client_repo.update(&client).await?;
    info!(client_id = %updated.id, "client updated");
    Ok(Json(updated))
}
