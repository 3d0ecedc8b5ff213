use serde::Deserialize;
use serde_json::Value;

use crate::domain::services::import::ImportRow;

#[derive(Deserialize)]
pub struct CreateTrainerRequest {
    pub name: String,
    pub email: String,
    pub specialty: Option<String>,
    pub bio: Option<String>,
    pub hourly_rate_cents: i32,
    /// Loosely typed on purpose; normalized with fallback-and-warn.
    pub working_hours: Option<Value>,
}

#[derive(Deserialize)]
pub struct UpdateTrainerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub specialty: Option<String>,
    pub bio: Option<String>,
    pub hourly_rate_cents: Option<i32>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub email: String,
    pub assigned_trainer_id: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub assigned_trainer_id: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateSessionStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: String,
    pub duration: i32,
    pub step: Option<i32>,
}

#[derive(Deserialize)]
pub struct SessionListQuery {
    pub trainer_id: String,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Deserialize)]
pub struct ImportValidateRequest {
    pub rows: Vec<ImportRow>,
}
