use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::models::trainer::Trainer;
use crate::domain::ports::TrainerRepository;
use crate::error::AppError;

#[derive(Default)]
pub struct MemoryTrainerRepo {
    store: RwLock<HashMap<String, Trainer>>,
}

impl MemoryTrainerRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TrainerRepository for MemoryTrainerRepo {
    async fn create(&self, trainer: &Trainer) -> Result<Trainer, AppError> {
        let mut store = self.store.write().await;
        store.insert(trainer.id.clone(), trainer.clone());
        Ok(trainer.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Trainer>, AppError> {
        Ok(self.store.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Trainer>, AppError> {
        let store = self.store.read().await;
        let mut trainers: Vec<Trainer> = store.values().cloned().collect();
        trainers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(trainers)
    }

    async fn update(&self, trainer: &Trainer) -> Result<Trainer, AppError> {
        let mut store = self.store.write().await;
        if !store.contains_key(&trainer.id) {
            return Err(AppError::NotFound(format!(
                "trainer '{}' not found",
                trainer.id
            )));
        }
        store.insert(trainer.id.clone(), trainer.clone());
        Ok(trainer.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut store = self.store.write().await;
        if store.remove(id).is_none() {
            return Err(AppError::NotFound(format!("trainer '{id}' not found")));
        }
        Ok(())
    }
}
