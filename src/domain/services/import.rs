use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::models::client::Client;
use crate::domain::models::session::{SessionStatus, SessionType};
use crate::domain::models::trainer::Trainer;
use crate::domain::services::timegrid;
use crate::domain::services::validation::{DATE_FORMAT, SESSION_MAX_MINUTES, SESSION_MIN_MINUTES};

/// One row of a CSV/batch onboarding file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportRow {
    pub trainer_id: Option<String>,
    pub client_id: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(rename = "type")]
    pub session_type: Option<String>,
    pub status: Option<String>,
    pub price_cents: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowIssue {
    /// Zero-based index of the offending row in the submitted batch.
    pub row: usize,
    pub field: String,
    pub value: String,
    pub error: String,
}

/// Advisory validation for bulk onboarding. Applies a reduced rule set
/// (field formats, referenced-id existence, the shared duration bound,
/// trainer/client consistency) and reports findings per row. It never
/// consults or writes the session store; committing rows is the caller's
/// separate decision.
pub fn validate_rows(
    rows: &[ImportRow],
    trainers: &HashMap<String, Trainer>,
    clients: &HashMap<String, Client>,
) -> Vec<RowIssue> {
    let mut report = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        check_row(index, row, trainers, clients, &mut report);
    }
    report
}

fn check_row(
    index: usize,
    input: &ImportRow,
    trainers: &HashMap<String, Trainer>,
    clients: &HashMap<String, Client>,
    report: &mut Vec<RowIssue>,
) {
    let mut push = |field: &str, value: &str, error: String| {
        report.push(RowIssue {
            row: index,
            field: field.to_string(),
            value: value.to_string(),
            error,
        });
    };

    let trainer = match input.trainer_id.as_deref().filter(|id| !id.is_empty()) {
        None => {
            push("trainer_id", "", "trainer_id is required".to_string());
            None
        }
        Some(id) => {
            let found = trainers.get(id);
            if found.is_none() {
                push("trainer_id", id, format!("unknown trainer '{id}'"));
            }
            found
        }
    };

    let client = match input.client_id.as_deref().filter(|id| !id.is_empty()) {
        None => {
            push("client_id", "", "client_id is required".to_string());
            None
        }
        Some(id) => {
            let found = clients.get(id);
            if found.is_none() {
                push("client_id", id, format!("unknown client '{id}'"));
            }
            found
        }
    };

    match input.date.as_deref() {
        None => push("date", "", "date is required".to_string()),
        Some(raw) => {
            if NaiveDate::parse_from_str(raw, DATE_FORMAT).is_err() {
                push("date", raw, format!("invalid date '{raw}', expected YYYY-MM-DD"));
            }
        }
    }

    let mut minutes_of = |field: &str, value: &Option<String>| match value.as_deref() {
        None => {
            push(field, "", format!("{field} is required"));
            None
        }
        Some(raw) => match timegrid::parse_minutes(raw) {
            Ok(minutes) => Some(minutes),
            Err(_) => {
                push(field, raw, format!("invalid time '{raw}', expected HH:MM"));
                None
            }
        },
    };

    let start = minutes_of("start_time", &input.start_time);
    let end = minutes_of("end_time", &input.end_time);

    if let (Some(start), Some(end)) = (start, end) {
        if start >= end {
            push(
                "end_time",
                input.end_time.as_deref().unwrap_or(""),
                "start_time must be before end_time".to_string(),
            );
        } else {
            let duration = i32::from(end - start);
            if !(SESSION_MIN_MINUTES..=SESSION_MAX_MINUTES).contains(&duration) {
                push(
                    "end_time",
                    input.end_time.as_deref().unwrap_or(""),
                    format!(
                        "session length must be {SESSION_MIN_MINUTES}-{SESSION_MAX_MINUTES} minutes, got {duration}"
                    ),
                );
            }
        }
    }

    if let Some(raw) = input.session_type.as_deref()
        && SessionType::parse(raw).is_none()
    {
        push("type", raw, format!("unknown session type '{raw}'"));
    }

    if let Some(raw) = input.status.as_deref()
        && SessionStatus::parse(raw).is_none()
    {
        push("status", raw, format!("unknown status '{raw}'"));
    }

    if let Some(price) = input.price_cents
        && price < 0
    {
        push(
            "price_cents",
            &price.to_string(),
            "price_cents must not be negative".to_string(),
        );
    }

    if let (Some(trainer), Some(client)) = (trainer, client)
        && let Some(assigned) = client.assigned_trainer_id.as_deref()
        && assigned != trainer.id
    {
        push(
            "trainer_id",
            &trainer.id,
            format!("client '{}' is assigned to trainer '{assigned}'", client.id),
        );
    }
}
