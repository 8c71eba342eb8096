use std::sync::Arc;
use mars_core::{DocumentStore, ScrapeRunner};

pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub scraper: Arc<dyn ScrapeRunner>,
}
