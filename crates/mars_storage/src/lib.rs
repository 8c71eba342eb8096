use async_trait::async_trait;
use mars_core::{DocumentStore, Error, Result};
use std::sync::Arc;

pub mod backends;

pub use backends::*;

/// Collection the scrape document lives in.
pub const COLLECTION: &str = "mars";

#[async_trait]
pub trait StorageBackend: DocumentStore + Sized {
    fn name() -> &'static str;

    /// Opens the backend; `url` overrides its default location.
    async fn connect(url: Option<&str>) -> Result<Self>;
}

async fn open<T: StorageBackend + 'static>(url: Option<&str>) -> Result<Arc<dyn DocumentStore>> {
    let store = T::connect(url).await?;
    tracing::info!("💾 Storage ready (using {})", T::name());
    Ok(Arc::new(store))
}

/// Picks a backend by name: `memory`, or `sqlite` when built with that feature.
pub async fn create_storage(kind: &str, url: Option<&str>) -> Result<Arc<dyn DocumentStore>> {
    match kind {
        "memory" => open::<MemoryStorage>(url).await,
        #[cfg(feature = "sqlite")]
        "sqlite" => open::<SQLiteStorage>(url).await,
        other => Err(Error::Config(format!("Unknown storage backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_storage, StorageBackend};
}
