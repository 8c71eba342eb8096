use async_trait::async_trait;
use crate::types::ScrapeResult;
use crate::Result;

/// A collection that holds at most one scrape document.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Replaces the stored document, creating it if the collection is empty.
    async fn upsert(&self, document: &ScrapeResult) -> Result<()>;

    /// The stored document, if any scrape has been saved yet.
    async fn find_one(&self) -> Result<Option<ScrapeResult>>;
}
