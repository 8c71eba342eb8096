use mars_core::{bounded, Result, ScrapeConfig, Session};
use scraper::Html;
use crate::logging::Logger;
use super::{absent_on_miss, utils};

pub const TEASER_CONTAINER: &str = "div.list_text";
pub const TEASER_TITLE: &str = "div.content_title";
pub const TEASER_BODY: &str = "div.article_teaser_body";

/// Headline and summary of the newest article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsTeaser {
    pub title: String,
    pub paragraph: String,
}

/// Reads the first teaser block off the news page.
///
/// A missing container, a missing child or a page that never loads all give
/// `None`; the title and paragraph are never reported separately.
pub async fn mars_news<S: Session>(session: &mut S, config: &ScrapeConfig) -> Result<Option<NewsTeaser>> {
    let logger = Logger::new().with_prefix("[news]");
    let result = load_teaser(session, config).await;
    let teaser = absent_on_miss(&logger, result)?;
    if let Some(teaser) = &teaser {
        logger.info(&format!("headline: {}", teaser.title));
    }
    Ok(teaser)
}

async fn load_teaser<S: Session>(session: &mut S, config: &ScrapeConfig) -> Result<NewsTeaser> {
    let timeout = config.op_timeout;
    bounded(timeout, "visit news page", session.visit(&config.news_url)).await?;

    // The list renders client-side; a short wait is enough and its outcome
    // does not matter, the parse below decides.
    let wait = config.news_wait;
    bounded(
        timeout.max(wait),
        "wait for teaser",
        session.wait_for_css(TEASER_CONTAINER, wait),
    )
    .await?;

    let markup = bounded(timeout, "read news page", session.current_markup()).await?;
    parse_teaser(&markup)
}

pub fn parse_teaser(markup: &str) -> Result<NewsTeaser> {
    let document = Html::parse_document(markup);
    let container = utils::first(&document, TEASER_CONTAINER)?;
    let title = utils::text_of(utils::first_within(container, TEASER_TITLE)?);
    let paragraph = utils::text_of(utils::first_within(container, TEASER_BODY)?);
    Ok(NewsTeaser { title, paragraph })
}
