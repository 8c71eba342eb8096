pub mod cli;
pub mod http;
pub mod logging;
pub mod manager;
pub mod scrapers;
pub mod webdriver;

#[cfg(test)]
mod tests;

pub use cli::ScrapeArgs;
pub use http::HttpFetcher;
pub use logging::{init_logging, Logger};
pub use manager::{scrape_all, ScrapeManager};
pub use webdriver::{WebDriverProvider, WebDriverSession};

pub mod prelude {
    pub use super::manager::{scrape_all, ScrapeManager};
    pub use mars_core::{Error, Result, ScrapeConfig, ScrapeResult};
}
