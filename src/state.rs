use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{ClientRepository, SessionRepository, TrainerRepository};
use crate::domain::services::booking::SessionService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub trainer_repo: Arc<dyn TrainerRepository>,
    pub client_repo: Arc<dyn ClientRepository>,
    pub session_repo: Arc<dyn SessionRepository>,
    pub session_service: Arc<SessionService>,
}
