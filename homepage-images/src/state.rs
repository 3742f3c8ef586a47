use crate::traits::BaseStore;
use crate::types::{ListItem, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// Keeps the most recent lead-section items in memory.
#[derive(Default)]
pub struct MemoryBaseStore {
    items: RwLock<Vec<ListItem>>,
}

impl MemoryBaseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseStore for MemoryBaseStore {
    async fn save_base(&self, items: &[ListItem]) -> Result<()> {
        let mut stored = self.items.write().await;
        *stored = items.to_vec();
        debug!(count = stored.len(), "Saved base items");
        Ok(())
    }

    async fn base_items(&self) -> Result<Vec<ListItem>> {
        Ok(self.items.read().await.clone())
    }
}
