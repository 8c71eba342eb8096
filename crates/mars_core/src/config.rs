use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use crate::{Error, Result};

pub const NEWS_URL: &str = "https://data-class-mars.s3.amazonaws.com/Mars/index.html";
pub const IMAGE_URL: &str = "https://data-class-jpl-space.s3.amazonaws.com/JPL_Space/index.html";
pub const IMAGE_BASE_URL: &str = "https://data-class-jpl-space.s3.amazonaws.com/JPL_Space/";
pub const FACTS_URL: &str = "https://data-class-mars-facts.s3.amazonaws.com/Mars_Facts/index.html";
pub const HEMISPHERE_URL: &str = "https://marshemispheres.com/";

/// The image page has no named control for the full-size view; it is the
/// second `button` in document order.
pub const REVEAL_BUTTON_INDEX: usize = 1;

/// Where and how to scrape. `Default` points at the production pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub news_url: String,
    pub image_url: String,
    pub image_base_url: String,
    pub facts_url: String,
    pub hemisphere_url: String,
    pub reveal_button_index: usize,
    #[serde(with = "millis")]
    pub news_wait: Duration,
    #[serde(with = "millis")]
    pub op_timeout: Duration,
    pub facts_table_class: String,
    pub concurrent_facts: bool,
    pub tolerant_hemisphere: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            news_url: NEWS_URL.to_string(),
            image_url: IMAGE_URL.to_string(),
            image_base_url: IMAGE_BASE_URL.to_string(),
            facts_url: FACTS_URL.to_string(),
            hemisphere_url: HEMISPHERE_URL.to_string(),
            reveal_button_index: REVEAL_BUTTON_INDEX,
            news_wait: Duration::from_secs(1),
            op_timeout: Duration::from_secs(30),
            facts_table_class: "table table-striped".to_string(),
            concurrent_facts: false,
            tolerant_hemisphere: false,
        }
    }
}

impl ScrapeConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Chrome,
    Firefox,
}

impl FromStr for Browser {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "chrome" => Ok(Browser::Chrome),
            "firefox" => Ok(Browser::Firefox),
            other => Err(Error::Config(format!("Unsupported browser: {}", other))),
        }
    }
}

/// How to reach the browser driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub webdriver_url: String,
    pub browser: Browser,
    pub headless: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:4444".to_string(),
            browser: Browser::Chrome,
            headless: true,
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"news_url": "http://localhost:9000/news", "op_timeout": 250}}"#).unwrap();

        let config = ScrapeConfig::from_file(file.path()).unwrap();
        assert_eq!(config.news_url, "http://localhost:9000/news");
        assert_eq!(config.op_timeout, Duration::from_millis(250));
        assert_eq!(config.image_url, IMAGE_URL);
        assert_eq!(config.reveal_button_index, 1);
        assert!(!config.tolerant_hemisphere);
    }

    #[test]
    fn test_bad_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(ScrapeConfig::from_file(file.path()), Err(Error::Config(_))));
    }

    #[test]
    fn test_browser_from_str() {
        assert_eq!("Chrome".parse::<Browser>().unwrap(), Browser::Chrome);
        assert_eq!("firefox".parse::<Browser>().unwrap(), Browser::Firefox);
        assert!("safari".parse::<Browser>().is_err());
    }
}
