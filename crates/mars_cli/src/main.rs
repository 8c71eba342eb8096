use clap::Parser;
use mars_core::{Result, ScrapeRunner};
use mars_scrapers::{init_logging, HttpFetcher, ScrapeArgs, ScrapeManager, WebDriverProvider};
use mars_web::AppState;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Scrape the Mars pages and serve the latest result", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run one scrape and print the record as JSON
    Scrape {
        #[command(flatten)]
        scrape: ScrapeArgs,
    },
    /// Serve the index page and the /scrape trigger
    Serve {
        #[command(flatten)]
        scrape: ScrapeArgs,
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:5000")]
        addr: String,
        /// Storage backend: memory, or sqlite when built with the sqlite feature
        #[arg(long, default_value = "memory")]
        storage: String,
        /// Backend location, e.g. a SQLite file path
        #[arg(long)]
        backend_url: Option<String>,
    },
}

fn build_manager(args: &ScrapeArgs) -> Result<ScrapeManager<WebDriverProvider>> {
    let config = args.scrape_config()?;
    let settings = args.session_settings()?;
    info!("🦗 Driving {:?} through {}", settings.browser, settings.webdriver_url);
    let fetcher = HttpFetcher::new(config.op_timeout)?;
    Ok(ScrapeManager::new(
        WebDriverProvider::new(settings),
        Arc::new(fetcher),
        config,
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape { scrape } => {
            let manager = build_manager(&scrape)?;
            let result = manager.run().await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Serve { scrape, addr, storage, backend_url } => {
            let manager = build_manager(&scrape)?;
            let store = mars_storage::create_storage(&storage, backend_url.as_deref()).await?;
            let state = AppState {
                store,
                scraper: Arc::new(manager),
            };
            mars_web::serve(state, &addr).await?;
        }
    }

    Ok(())
}
