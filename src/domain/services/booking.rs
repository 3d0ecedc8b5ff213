use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::models::session::{Session, SessionStatus};
use crate::domain::models::slot::Slot;
use crate::domain::ports::{ClientRepository, SessionRepository, TrainerRepository};
use crate::domain::services::availability;
use crate::domain::services::validation::{
    self, SessionRequest, ValidationContext, validate_session_request,
};
use crate::error::AppError;

/// Booking entry point. Conflict-check-and-insert is serialized per
/// `(trainer_id, date)` so two concurrent overlapping requests cannot both
/// pass the conflict check; reads take no lock and see a consistent
/// snapshot.
pub struct SessionService {
    trainers: Arc<dyn TrainerRepository>,
    clients: Arc<dyn ClientRepository>,
    sessions: Arc<dyn SessionRepository>,
    day_locks: Mutex<HashMap<(String, NaiveDate), Arc<Mutex<()>>>>,
}

impl SessionService {
    pub fn new(
        trainers: Arc<dyn TrainerRepository>,
        clients: Arc<dyn ClientRepository>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            trainers,
            clients,
            sessions,
            day_locks: Mutex::new(HashMap::new()),
        }
    }

    async fn day_lock(&self, trainer_id: &str, date: NaiveDate) -> Arc<Mutex<()>> {
        let mut locks = self.day_locks.lock().await;
        if locks.len() > 1024 {
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        }
        locks
            .entry((trainer_id.to_string(), date))
            .or_default()
            .clone()
    }

    pub async fn create_session(&self, request: SessionRequest) -> Result<Session, AppError> {
        let trainer = match request.trainer_id.as_deref() {
            Some(id) => self.trainers.find_by_id(id).await?,
            None => None,
        };
        let client = match request.client_id.as_deref() {
            Some(id) => self.clients.find_by_id(id).await?,
            None => None,
        };
        let date = request
            .date
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw, validation::DATE_FORMAT).ok());

        // The trainer-day lock spans conflict check and insert.
        let lock = match (trainer.as_ref(), date) {
            (Some(trainer), Some(date)) => Some(self.day_lock(&trainer.id, date).await),
            _ => None,
        };
        let _guard = match lock.as_ref() {
            Some(lock) => Some(lock.lock().await),
            None => None,
        };

        let existing = match (trainer.as_ref(), date) {
            (Some(trainer), Some(date)) => {
                self.sessions.list_active_on_date(&trainer.id, date).await?
            }
            _ => Vec::new(),
        };

        let validated = validate_session_request(
            &request,
            &ValidationContext {
                trainer: trainer.as_ref(),
                client: client.as_ref(),
                existing: &existing,
                today: Local::now().date_naive(),
            },
        )
        .map_err(|issues| {
            warn!(issue_count = issues.len(), "booking request rejected");
            AppError::ValidationFailed(issues)
        })?;

        let created = self.sessions.create(&validated).await?;
        info!(
            session_id = %created.id,
            trainer_id = %created.trainer_id,
            date = %created.date,
            "session booked"
        );
        Ok(created)
    }

    pub async fn update_status(
        &self,
        id: &str,
        new_status: SessionStatus,
    ) -> Result<Session, AppError> {
        let mut session = self
            .sessions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("session '{id}' not found")))?;

        if !session.status.can_transition_to(new_status) {
            return Err(AppError::InvalidTransition(format!(
                "cannot move session '{id}' from {} to {new_status}",
                session.status
            )));
        }

        session.status = new_status;
        let updated = self.sessions.update(&session).await?;
        info!(session_id = %updated.id, status = %updated.status, "session status updated");
        Ok(updated)
    }

    /// Cancelling an already-cancelled session is a no-op; cancelling from
    /// any other terminal status is an invalid transition.
    pub async fn cancel(&self, id: &str) -> Result<Session, AppError> {
        let session = self
            .sessions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("session '{id}' not found")))?;

        if session.status == SessionStatus::Cancelled {
            return Ok(session);
        }
        self.update_status(id, SessionStatus::Cancelled).await
    }

    pub async fn available_slots(
        &self,
        trainer_id: &str,
        date: NaiveDate,
        duration_min: i32,
        step_min: i32,
    ) -> Result<Vec<Slot>, AppError> {
        let trainer = self
            .trainers
            .find_by_id(trainer_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("trainer '{trainer_id}' not found")))?;

        let existing = self.sessions.list_active_on_date(trainer_id, date).await?;
        availability::generate_slots(&trainer, date, duration_min, step_min, &existing)
    }
}
