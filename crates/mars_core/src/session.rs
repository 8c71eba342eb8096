use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use crate::{Error, Result};

/// A live, navigable browser page.
///
/// Element handles are only valid for the markup they were found in; after
/// any navigation they must be looked up again.
#[async_trait]
pub trait Session: Send {
    type Element: Send + Sync;

    async fn visit(&mut self, url: &str) -> Result<()>;

    /// Polls for `selector` until it appears or `timeout` runs out.
    async fn wait_for_css(&mut self, selector: &str, timeout: Duration) -> Result<bool>;

    /// Matching elements in document order.
    async fn find_all(&mut self, selector: &str) -> Result<Vec<Self::Element>>;

    async fn click(&mut self, element: &Self::Element) -> Result<()>;

    async fn back(&mut self) -> Result<()>;

    /// Address of the page the browser is showing, after redirects.
    async fn current_url(&mut self) -> Result<String>;

    /// The rendered document as it stands now.
    async fn current_markup(&mut self) -> Result<String>;

    /// Releases the browser. Calling it twice is an error on real drivers.
    async fn quit(&mut self) -> Result<()>;
}

#[async_trait]
pub trait SessionProvider: Send + Sync {
    type Session: Session;

    async fn open(&self) -> Result<Self::Session>;
}

/// Runs `fut` with a deadline; running out becomes `NavigationTimeout`.
pub async fn bounded<T, F>(timeout: Duration, what: &str, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => Err(Error::NavigationTimeout(format!(
            "{} after {}ms",
            what,
            timeout.as_millis()
        ))),
    }
}
