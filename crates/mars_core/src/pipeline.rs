use async_trait::async_trait;
use crate::types::ScrapeResult;
use crate::Result;

/// Something that can produce a fresh scrape on demand.
#[async_trait]
pub trait ScrapeRunner: Send + Sync {
    async fn run(&self) -> Result<ScrapeResult>;
}
