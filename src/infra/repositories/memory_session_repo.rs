use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::models::session::{Session, SessionStatus};
use crate::domain::ports::SessionRepository;
use crate::error::AppError;

#[derive(Default)]
pub struct MemorySessionRepo {
    store: RwLock<HashMap<String, Session>>,
}

impl MemorySessionRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

fn by_start(a: &Session, b: &Session) -> std::cmp::Ordering {
    (a.date, &a.start_time).cmp(&(b.date, &b.start_time))
}

#[async_trait]
impl SessionRepository for MemorySessionRepo {
    async fn create(&self, session: &Session) -> Result<Session, AppError> {
        let mut store = self.store.write().await;
        store.insert(session.id.clone(), session.clone());
        Ok(session.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Session>, AppError> {
        Ok(self.store.read().await.get(id).cloned())
    }

    async fn list_by_trainer(&self, trainer_id: &str) -> Result<Vec<Session>, AppError> {
        let store = self.store.read().await;
        let mut sessions: Vec<Session> = store
            .values()
            .filter(|s| s.trainer_id == trainer_id)
            .cloned()
            .collect();
        sessions.sort_by(by_start);
        Ok(sessions)
    }

    async fn list_active_on_date(
        &self,
        trainer_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Session>, AppError> {
        let store = self.store.read().await;
        let mut sessions: Vec<Session> = store
            .values()
            .filter(|s| {
                s.trainer_id == trainer_id
                    && s.date == date
                    && s.status != SessionStatus::Cancelled
            })
            .cloned()
            .collect();
        sessions.sort_by(by_start);
        Ok(sessions)
    }

    async fn list_by_range(
        &self,
        trainer_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Session>, AppError> {
        let store = self.store.read().await;
        let mut sessions: Vec<Session> = store
            .values()
            .filter(|s| s.trainer_id == trainer_id && s.date >= from && s.date <= to)
            .cloned()
            .collect();
        sessions.sort_by(by_start);
        Ok(sessions)
    }

    async fn update(&self, session: &Session) -> Result<Session, AppError> {
        let mut store = self.store.write().await;
        if !store.contains_key(&session.id) {
            return Err(AppError::NotFound(format!(
                "session '{}' not found",
                session.id
            )));
        }
        store.insert(session.id.clone(), session.clone());
        Ok(session.clone())
    }

    async fn has_sessions_for_trainer(&self, trainer_id: &str) -> Result<bool, AppError> {
        let store = self.store.read().await;
        Ok(store.values().any(|s| s.trainer_id == trainer_id))
    }
}
