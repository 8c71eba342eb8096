pub mod config;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod session;
pub mod storage;
pub mod types;

pub use config::{Browser, ScrapeConfig, SessionSettings};
pub use error::{Error, Result};
pub use fetch::PageFetcher;
pub use pipeline::ScrapeRunner;
pub use session::{bounded, Session, SessionProvider};
pub use storage::DocumentStore;
pub use types::{HemisphereEntry, ScrapeResult};
