use async_trait::async_trait;
use crate::Result;

/// Plain HTTP retrieval, for pages that need no browser.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Body of a successful response; anything else is `Error::FetchFailed`.
    async fn fetch(&self, url: &str) -> Result<String>;
}
