use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::models::client::Client;
use crate::domain::ports::ClientRepository;
use crate::error::AppError;

#[derive(Default)]
pub struct MemoryClientRepo {
    store: RwLock<HashMap<String, Client>>,
}

impl MemoryClientRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRepository for MemoryClientRepo {
    async fn create(&self, client: &Client) -> Result<Client, AppError> {
        let mut store = self.store.write().await;
        store.insert(client.id.clone(), client.clone());
        Ok(client.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Client>, AppError> {
        Ok(self.store.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Client>, AppError> {
        let store = self.store.read().await;
        let mut clients: Vec<Client> = store.values().cloned().collect();
        clients.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clients)
    }

    async fn update(&self, client: &Client) -> Result<Client, AppError> {
        let mut store = self.store.write().await;
        if !store.contains_key(&client.id) {
            return Err(AppError::NotFound(format!(
                "client '{}' not found",
                client.id
            )));
        }
        store.insert(client.id.clone(), client.clone());
        Ok(client.clone())
    }
}
