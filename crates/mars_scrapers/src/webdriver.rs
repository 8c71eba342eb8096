use async_trait::async_trait;
use mars_core::{Browser, Error, Result, Session, SessionProvider, SessionSettings};
use std::time::Duration;
use thirtyfour::prelude::ElementQueryable;
use thirtyfour::{By, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver, WebElement};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn driver_error(action: &str, e: impl std::fmt::Display) -> Error {
    Error::Session(format!("{}: {}", action, e))
}

/// Starts browser sessions on a running WebDriver server
/// (chromedriver, geckodriver or a Selenium hub).
#[derive(Debug, Clone)]
pub struct WebDriverProvider {
    settings: SessionSettings,
}

impl WebDriverProvider {
    pub fn new(settings: SessionSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl SessionProvider for WebDriverProvider {
    type Session = WebDriverSession;

    async fn open(&self) -> Result<WebDriverSession> {
        let url = self.settings.webdriver_url.as_str();
        let driver = match self.settings.browser {
            Browser::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                if self.settings.headless {
                    caps.set_headless().map_err(|e| driver_error("chrome capabilities", e))?;
                }
                WebDriver::new(url, caps).await
            }
            Browser::Firefox => {
                let mut caps = DesiredCapabilities::firefox();
                if self.settings.headless {
                    caps.set_headless().map_err(|e| driver_error("firefox capabilities", e))?;
                }
                WebDriver::new(url, caps).await
            }
        }
        .map_err(|e| driver_error(&format!("connect to {}", url), e))?;

        tracing::debug!("🌐 {:?} session started on {}", self.settings.browser, url);
        Ok(WebDriverSession { driver: Some(driver) })
    }
}

/// One live browser. `quit` consumes the driver, later calls fail.
pub struct WebDriverSession {
    driver: Option<WebDriver>,
}

impl WebDriverSession {
    fn driver(&self) -> Result<&WebDriver> {
        self.driver
            .as_ref()
            .ok_or_else(|| Error::Session("session already quit".to_string()))
    }
}

#[async_trait]
impl Session for WebDriverSession {
    type Element = WebElement;

    async fn visit(&mut self, url: &str) -> Result<()> {
        self.driver()?
            .goto(url)
            .await
            .map_err(|e| driver_error(&format!("visit {}", url), e))
    }

    async fn wait_for_css(&mut self, selector: &str, timeout: Duration) -> Result<bool> {
        self.driver()?
            .query(By::Css(selector.to_string()))
            .wait(timeout, POLL_INTERVAL)
            .exists()
            .await
            .map_err(|e| driver_error(&format!("wait for {}", selector), e))
    }

    async fn find_all(&mut self, selector: &str) -> Result<Vec<WebElement>> {
        self.driver()?
            .find_all(By::Css(selector.to_string()))
            .await
            .map_err(|e| driver_error(&format!("find {}", selector), e))
    }

    async fn click(&mut self, element: &WebElement) -> Result<()> {
        element.click().await.map_err(|e| driver_error("click", e))
    }

    async fn back(&mut self) -> Result<()> {
        self.driver()?.back().await.map_err(|e| driver_error("back", e))
    }

    async fn current_url(&mut self) -> Result<String> {
        self.driver()?
            .current_url()
            .await
            .map(|url| url.to_string())
            .map_err(|e| driver_error("current url", e))
    }

    async fn current_markup(&mut self) -> Result<String> {
        self.driver()?.source().await.map_err(|e| driver_error("page source", e))
    }

    async fn quit(&mut self) -> Result<()> {
        let driver = self
            .driver
            .take()
            .ok_or_else(|| Error::Session("session already quit".to_string()))?;
        driver.quit().await.map_err(|e| driver_error("quit", e))
    }
}
