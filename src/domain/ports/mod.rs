use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::models::{client::Client, session::Session, trainer::Trainer};
use crate::error::AppError;

#[async_trait]
pub trait TrainerRepository: Send + Sync {
    async fn create(&self, trainer: &Trainer) -> Result<Trainer, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Trainer>, AppError>;
    async fn list(&self) -> Result<Vec<Trainer>, AppError>;
    async fn update(&self, trainer: &Trainer) -> Result<Trainer, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn create(&self, client: &Client) -> Result<Client, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Client>, AppError>;
    async fn list(&self) -> Result<Vec<Client>, AppError>;
    async fn update(&self, client: &Client) -> Result<Client, AppError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &Session) -> Result<Session, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Session>, AppError>;
    async fn list_by_trainer(&self, trainer_id: &str) -> Result<Vec<Session>, AppError>;
    /// Non-cancelled sessions of a trainer on one calendar day, the view
    /// conflict checks run against.
    async fn list_active_on_date(
        &self,
        trainer_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Session>, AppError>;
    async fn list_by_range(
        &self,
        trainer_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Session>, AppError>;
    async fn update(&self, session: &Session) -> Result<Session, AppError>;
    async fn has_sessions_for_trainer(&self, trainer_id: &str) -> Result<bool, AppError>;
}
