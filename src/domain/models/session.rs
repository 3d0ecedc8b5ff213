use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::services::timegrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Scheduled,
    Completed,
    Cancelled,
    #[serde(rename = "no-show")]
    NoShow,
}

impl SessionStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "scheduled" => Some(SessionStatus::Scheduled),
            "completed" => Some(SessionStatus::Completed),
            "cancelled" => Some(SessionStatus::Cancelled),
            "no-show" => Some(SessionStatus::NoShow),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionStatus::Scheduled)
    }

    /// `scheduled` may move to any terminal status; nothing leaves a
    /// terminal status.
    pub fn can_transition_to(&self, next: SessionStatus) -> bool {
        matches!(self, SessionStatus::Scheduled) && next != SessionStatus::Scheduled
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            SessionStatus::Scheduled => "scheduled",
            SessionStatus::Completed => "completed",
            SessionStatus::Cancelled => "cancelled",
            SessionStatus::NoShow => "no-show",
        };
        f.write_str(token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Personal,
    Group,
    Consultation,
}

impl SessionType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "personal" => Some(SessionType::Personal),
            "group" => Some(SessionType::Group),
            "consultation" => Some(SessionType::Consultation),
            _ => None,
        }
    }
}

/// A booked training session. Trainer and client are referenced by id only;
/// deleting a trainer does not cascade here.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Session {
    pub id: String,
    pub trainer_id: String,
    pub client_id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub status: SessionStatus,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub notes: Option<String>,
    /// Price snapshot taken at creation; later rate edits do not reprice.
    pub price_cents: i32,
    pub created_at: DateTime<Utc>,
}

pub struct NewSessionParams {
    pub trainer_id: String,
    pub client_id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub session_type: SessionType,
    pub notes: Option<String>,
    pub price_cents: i32,
}

impl Session {
    pub fn new(params: NewSessionParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            trainer_id: params.trainer_id,
            client_id: params.client_id,
            date: params.date,
            start_time: params.start_time,
            end_time: params.end_time,
            status: SessionStatus::Scheduled,
            session_type: params.session_type,
            notes: params.notes,
            price_cents: params.price_cents,
            created_at: Utc::now(),
        }
    }

    /// Minute interval of the session; `None` if the stored times are
    /// malformed (they are validated on the way in).
    pub fn interval(&self) -> Option<(u16, u16)> {
        let start = timegrid::parse_minutes(&self.start_time).ok()?;
        let end = timegrid::parse_minutes(&self.end_time).ok()?;
        Some((start, end))
    }
}
