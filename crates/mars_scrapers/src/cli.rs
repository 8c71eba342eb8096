use clap::Args;
use mars_core::{Browser, Result, ScrapeConfig, SessionSettings};
use std::path::PathBuf;

/// Flags shared by every command that scrapes.
#[derive(Args, Debug, Clone)]
pub struct ScrapeArgs {
    /// JSON file with target URLs and timeouts; omitted keys use the defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// WebDriver server to drive the browser through
    #[arg(long, default_value = "http://localhost:4444")]
    pub webdriver_url: String,

    /// Browser to request from the WebDriver server (chrome, firefox)
    #[arg(long, default_value = "chrome")]
    pub browser: String,

    /// Show the browser window instead of running headless
    #[arg(long)]
    pub headful: bool,

    /// Per-operation timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Fetch the facts table while the browser works through the other pages
    #[arg(long)]
    pub concurrent_facts: bool,

    /// Keep going with an empty hemisphere list when the gallery is incomplete
    #[arg(long)]
    pub tolerant_hemisphere: bool,
}

impl ScrapeArgs {
    pub fn scrape_config(&self) -> Result<ScrapeConfig> {
        let mut config = match &self.config {
            Some(path) => ScrapeConfig::from_file(path)?,
            None => ScrapeConfig::default(),
        };
        if let Some(ms) = self.timeout_ms {
            config.op_timeout = std::time::Duration::from_millis(ms);
        }
        config.concurrent_facts |= self.concurrent_facts;
        config.tolerant_hemisphere |= self.tolerant_hemisphere;
        Ok(config)
    }

    pub fn session_settings(&self) -> Result<SessionSettings> {
        Ok(SessionSettings {
            webdriver_url: self.webdriver_url.clone(),
            browser: self.browser.parse::<Browser>()?,
            headless: !self.headful,
        })
    }
}
