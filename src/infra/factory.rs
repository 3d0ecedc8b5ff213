use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::domain::ports::{ClientRepository, SessionRepository, TrainerRepository};
use crate::domain::services::booking::SessionService;
use crate::infra::repositories::{
    memory_client_repo::MemoryClientRepo, memory_session_repo::MemorySessionRepo,
    memory_trainer_repo::MemoryTrainerRepo,
};
use crate::state::AppState;

pub fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing in-memory store...");

    let trainer_repo: Arc<dyn TrainerRepository> = Arc::new(MemoryTrainerRepo::new());
    let client_repo: Arc<dyn ClientRepository> = Arc::new(MemoryClientRepo::new());
    let session_repo: Arc<dyn SessionRepository> = Arc::new(MemorySessionRepo::new());

    let session_service = Arc::new(SessionService::new(
        trainer_repo.clone(),
        client_repo.clone(),
        session_repo.clone(),
    ));

    AppState {
        config: config.clone(),
        trainer_repo,
        client_repo,
        session_repo,
        session_service,
    }
}
