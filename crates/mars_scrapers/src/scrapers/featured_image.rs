use mars_core::{bounded, Error, Result, ScrapeConfig, Session};
use scraper::Html;
use crate::logging::Logger;
use super::{absent_on_miss, utils};

pub const BUTTON: &str = "button";
pub const FULL_IMAGE: &str = "img.fancybox-image";

/// Opens the full-size viewer on the image page and returns the image URL.
///
/// The click has to happen before the markup is read: the full-size `img`
/// only exists once the viewer is open.
pub async fn featured_image<S: Session>(session: &mut S, config: &ScrapeConfig) -> Result<Option<String>> {
    let logger = Logger::new().with_prefix("[featured]");
    let result = reveal_and_read(session, config).await;
    let url = absent_on_miss(&logger, result)?;
    if let Some(url) = &url {
        logger.info(&format!("image: {}", url));
    }
    Ok(url)
}

async fn reveal_and_read<S: Session>(session: &mut S, config: &ScrapeConfig) -> Result<String> {
    let timeout = config.op_timeout;
    bounded(timeout, "visit image page", session.visit(&config.image_url)).await?;

    let buttons = bounded(timeout, "find buttons", session.find_all(BUTTON)).await?;
    let index = config.reveal_button_index;
    let button = buttons.get(index).ok_or_else(|| {
        Error::ElementNotFound(format!("{} #{} (page has {})", BUTTON, index, buttons.len()))
    })?;
    bounded(timeout, "click full image button", session.click(button)).await?;

    let markup = bounded(timeout, "read image page", session.current_markup()).await?;
    let relative = parse_full_image(&markup)?;
    Ok(resolve_image_url(&config.image_base_url, &relative))
}

pub fn parse_full_image(markup: &str) -> Result<String> {
    let document = Html::parse_document(markup);
    let image = utils::first(&document, FULL_IMAGE)?;
    image
        .value()
        .attr("src")
        .map(str::to_string)
        .ok_or_else(|| Error::ElementNotFound(format!("{}[src]", FULL_IMAGE)))
}

/// Prefixes `relative` with the image page's base path.
pub fn resolve_image_url(base: &str, relative: &str) -> String {
    if relative.starts_with("http://") || relative.starts_with("https://") {
        relative.to_string()
    } else {
        format!("{}{}", base, relative)
    }
}
