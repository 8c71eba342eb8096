use async_trait::async_trait;
use chrono::Utc;
use mars_core::{
    Error, HemisphereEntry, PageFetcher, Result, ScrapeConfig, ScrapeResult, ScrapeRunner, Session,
    SessionProvider,
};
use std::sync::Arc;
use crate::logging::Logger;
use crate::scrapers::{self, absent_on_miss, NewsTeaser};

/// Runs one complete scrape.
///
/// Opens a single browser session, runs news, featured image, facts and
/// hemispheres in that order, and stamps the result. The session is quit
/// exactly once whether or not a step faulted.
pub async fn scrape_all<P, F>(provider: &P, fetcher: &F, config: &ScrapeConfig) -> Result<ScrapeResult>
where
    P: SessionProvider + ?Sized,
    F: PageFetcher + ?Sized,
{
    let logger = Logger::new().with_prefix("[scrape]");
    let mut session = provider.open().await?;
    logger.debug("session opened");

    let outcome = run_steps(&mut session, fetcher, config).await;
    let released = session.quit().await;
    logger.debug("session released");

    match (outcome, released) {
        (Ok(result), Ok(())) => {
            logger.info(&format!("done, {} hemispheres", result.hemisphere.len()));
            Ok(result)
        }
        (Ok(result), Err(e)) => {
            logger.warn(&format!("session release failed: {}", e));
            Ok(result)
        }
        (Err(e), released) => {
            if let Err(quit_error) = released {
                logger.warn(&format!("session release failed: {}", quit_error));
            }
            logger.error(&format!("scrape aborted: {}", e));
            Err(e)
        }
    }
}

async fn run_steps<S, F>(session: &mut S, fetcher: &F, config: &ScrapeConfig) -> Result<ScrapeResult>
where
    S: Session,
    F: PageFetcher + ?Sized,
{
    let (news, featured_image, facts, hemisphere) = if config.concurrent_facts {
        let browser_steps = async {
            let news = scrapers::mars_news(session, config).await?;
            let featured_image = scrapers::featured_image(session, config).await?;
            let hemisphere = hemisphere_step(session, config).await?;
            Ok::<_, Error>((news, featured_image, hemisphere))
        };
        let (browser, facts) = tokio::join!(browser_steps, scrapers::mars_facts(fetcher, config));
        let (news, featured_image, hemisphere) = browser?;
        (news, featured_image, facts?, hemisphere)
    } else {
        let news = scrapers::mars_news(session, config).await?;
        let featured_image = scrapers::featured_image(session, config).await?;
        let facts = scrapers::mars_facts(fetcher, config).await?;
        let hemisphere = hemisphere_step(session, config).await?;
        (news, featured_image, facts, hemisphere)
    };

    let (news_title, news_paragraph) = match news {
        Some(NewsTeaser { title, paragraph }) => (Some(title), Some(paragraph)),
        None => (None, None),
    };

    Ok(ScrapeResult {
        news_title,
        news_paragraph,
        featured_image,
        facts,
        hemisphere,
        last_modified: Utc::now(),
    })
}

async fn hemisphere_step<S: Session>(session: &mut S, config: &ScrapeConfig) -> Result<Vec<HemisphereEntry>> {
    let result = scrapers::hemispheres(session, config).await;
    if config.tolerant_hemisphere {
        let logger = Logger::new().with_prefix("[hemisphere]");
        Ok(absent_on_miss(&logger, result)?.unwrap_or_default())
    } else {
        result
    }
}

/// A configured scraper the web layer can trigger repeatedly.
pub struct ScrapeManager<P> {
    provider: P,
    fetcher: Arc<dyn PageFetcher>,
    config: ScrapeConfig,
}

impl<P: SessionProvider> ScrapeManager<P> {
    pub fn new(provider: P, fetcher: Arc<dyn PageFetcher>, config: ScrapeConfig) -> Self {
        Self {
            provider,
            fetcher,
            config,
        }
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }
}

#[async_trait]
impl<P: SessionProvider> ScrapeRunner for ScrapeManager<P> {
    async fn run(&self) -> Result<ScrapeResult> {
        scrape_all(&self.provider, self.fetcher.as_ref(), &self.config).await
    }
}
