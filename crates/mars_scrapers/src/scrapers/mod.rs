use mars_core::Result;
use crate::logging::Logger;

pub mod facts;
pub mod featured_image;
pub mod hemisphere;
pub mod news;

pub use facts::{mars_facts, FactRow, FactsTable};
pub use featured_image::featured_image;
pub use hemisphere::hemispheres;
pub use news::{mars_news, NewsTeaser};

/// Turns "the page didn't have it" into `None` and lets real faults through.
pub(crate) fn absent_on_miss<T>(logger: &Logger, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_absence() => {
            logger.warn(&format!("unavailable: {}", e));
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Common utilities for extractors
pub(crate) mod utils {
    use mars_core::{Error, Result};
    use scraper::{ElementRef, Html, Selector};
    use url::Url;

    pub fn selector(css: &str) -> Result<Selector> {
        Selector::parse(css).map_err(|e| Error::Config(format!("Invalid selector {}: {}", css, e)))
    }

    pub fn text_of(element: ElementRef<'_>) -> String {
        element.text().collect::<String>().trim().to_string()
    }

    pub fn first<'a>(document: &'a Html, css: &str) -> Result<ElementRef<'a>> {
        let selector = selector(css)?;
        document
            .select(&selector)
            .next()
            .ok_or_else(|| Error::ElementNotFound(css.to_string()))
    }

    pub fn first_within<'a>(scope: ElementRef<'a>, css: &str) -> Result<ElementRef<'a>> {
        let selector = selector(css)?;
        scope
            .select(&selector)
            .next()
            .ok_or_else(|| Error::ElementNotFound(css.to_string()))
    }

    pub fn resolve(base: &str, href: &str) -> Result<String> {
        let base = Url::parse(base).map_err(|e| Error::InvalidUrl(format!("{}: {}", base, e)))?;
        base.join(href)
            .map(String::from)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", href, e)))
    }
}
