use mars_core::{bounded, Error, HemisphereEntry, Result, ScrapeConfig, Session};
use scraper::Html;
use crate::logging::Logger;
use super::utils;

pub const THUMBNAIL: &str = "a.product-item img";
pub const SAMPLE_LINK_TEXT: &str = "Sample";
pub const TITLE: &str = "h2.title";

/// Clicks through every gallery thumbnail and collects its full image.
///
/// Thumbnails are looked up again on each pass because going back reloads the
/// gallery. The lookup is by position, so a gallery that reorders itself
/// between visits makes us open the wrong item.
///
/// Any fault aborts the whole step.
pub async fn hemispheres<S: Session>(session: &mut S, config: &ScrapeConfig) -> Result<Vec<HemisphereEntry>> {
    let logger = Logger::new().with_prefix("[hemisphere]");
    let timeout = config.op_timeout;
    let gallery = config.hemisphere_url.as_str();

    bounded(timeout, "visit gallery", session.visit(gallery)).await?;
    let count = bounded(timeout, "find thumbnails", session.find_all(THUMBNAIL)).await?.len();
    logger.debug(&format!("{} thumbnails", count));

    let mut entries = Vec::with_capacity(count);
    for i in 0..count {
        let thumbnails = bounded(timeout, "find thumbnails", session.find_all(THUMBNAIL)).await?;
        let thumbnail = thumbnails.get(i).ok_or_else(|| {
            Error::ElementNotFound(format!("{} #{} (gallery now has {})", THUMBNAIL, i, thumbnails.len()))
        })?;
        bounded(timeout, "open hemisphere", session.click(thumbnail)).await?;

        let page = bounded(timeout, "locate hemisphere page", session.current_url()).await?;
        let markup = bounded(timeout, "read hemisphere page", session.current_markup()).await?;
        let entry = parse_detail(&markup, &page)?;
        logger.info(&format!("{}/{} {}", i + 1, count, entry.title));
        entries.push(entry);

        bounded(timeout, "back to gallery", session.back()).await?;
    }

    Ok(entries)
}

/// Reads the title and the `Sample` download link off a detail page.
/// Relative links are resolved against `base`, the detail page's own URL.
pub fn parse_detail(markup: &str, base: &str) -> Result<HemisphereEntry> {
    let document = Html::parse_document(markup);
    let links = utils::selector("a")?;
    let href = document
        .select(&links)
        .find(|a| utils::text_of(*a) == SAMPLE_LINK_TEXT)
        .and_then(|a| a.value().attr("href"))
        .ok_or_else(|| Error::ElementNotFound(format!("link '{}'", SAMPLE_LINK_TEXT)))?;
    let title = utils::text_of(utils::first(&document, TITLE)?);

    Ok(HemisphereEntry {
        title,
        img_url: utils::resolve(base, href)?,
    })
}
