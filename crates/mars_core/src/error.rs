use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Navigation timed out: {0}")]
    NavigationTimeout(String),

    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// True for faults that mean "the page did not give us this piece".
    ///
    /// Tolerant extractors turn these into an absent field; anything else
    /// (a dead driver, a storage failure) keeps propagating.
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            Error::ElementNotFound(_) | Error::NavigationTimeout(_) | Error::FetchFailed(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absence_classification() {
        assert!(Error::ElementNotFound("div.list_text".into()).is_absence());
        assert!(Error::NavigationTimeout("visit".into()).is_absence());
        assert!(Error::FetchFailed("503".into()).is_absence());
        assert!(!Error::Session("driver gone".into()).is_absence());
        assert!(!Error::Storage("locked".into()).is_absence());
    }
}
