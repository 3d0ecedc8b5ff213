use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Set once the client has a regular trainer; new bookings with another
    /// trainer must be explicit reassignments.
    pub assigned_trainer_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Client {
    pub fn new(name: String, email: String, assigned_trainer_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            assigned_trainer_id,
            created_at: Utc::now(),
        }
    }
}
