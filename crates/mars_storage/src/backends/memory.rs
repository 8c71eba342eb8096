use async_trait::async_trait;
use mars_core::{DocumentStore, Result, ScrapeResult};
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::StorageBackend;

/// Keeps the document in process; gone on restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    document: Arc<RwLock<Option<ScrapeResult>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    fn name() -> &'static str {
        "memory"
    }

    async fn connect(_url: Option<&str>) -> Result<Self> {
        Ok(Self::new())
    }
}

#[async_trait]
impl DocumentStore for MemoryStorage {
    async fn upsert(&self, document: &ScrapeResult) -> Result<()> {
        *self.document.write().await = Some(document.clone());
        Ok(())
    }

    async fn find_one(&self) -> Result<Option<ScrapeResult>> {
        Ok(self.document.read().await.clone())
    }
}
