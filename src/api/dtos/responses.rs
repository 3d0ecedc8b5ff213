use serde::Serialize;

use crate::domain::models::trainer::Trainer;
use crate::domain::services::import::RowIssue;

#[derive(Serialize)]
pub struct TrainerResponse {
    #[serde(flatten)]
    pub trainer: Trainer,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schedule_warnings: Vec<String>,
}

#[derive(Serialize)]
pub struct ImportValidationResponse {
    pub rows_checked: usize,
    pub issues: Vec<RowIssue>,
}
