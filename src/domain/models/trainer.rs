use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::schedule::WeekSchedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainerStatus {
    Active,
    Inactive,
    Suspended,
    Deleted,
}

impl TrainerStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "active" => Some(TrainerStatus::Active),
            "inactive" => Some(TrainerStatus::Inactive),
            "suspended" => Some(TrainerStatus::Suspended),
            "deleted" => Some(TrainerStatus::Deleted),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Trainer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub specialty: Option<String>,
    pub bio: Option<String>,
    /// Hourly rate in cents; prices generated slots, never gates availability.
    pub hourly_rate_cents: i32,
    pub status: TrainerStatus,
    pub working_hours: WeekSchedule,
    pub created_at: DateTime<Utc>,
}

pub struct NewTrainerParams {
    pub name: String,
    pub email: String,
    pub specialty: Option<String>,
    pub bio: Option<String>,
    pub hourly_rate_cents: i32,
    pub working_hours: WeekSchedule,
}

impl Trainer {
    pub fn new(params: NewTrainerParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            email: params.email,
            specialty: params.specialty,
            bio: params.bio,
            hourly_rate_cents: params.hourly_rate_cents,
            status: TrainerStatus::Active,
            working_hours: params.working_hours,
            created_at: Utc::now(),
        }
    }

    /// Only active trainers may be booked; `inactive`, `suspended` and
    /// `deleted` all fail the same way.
    pub fn is_bookable(&self) -> bool {
        self.status == TrainerStatus::Active
    }
}
