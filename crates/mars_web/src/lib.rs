use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::index))
        .route("/scrape", get(handlers::scrape))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Serves the app until the process is stopped.
pub async fn serve(state: AppState, addr: &str) -> mars_core::Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use mars_core::{Error, Result, ScrapeResult};
    pub use crate::AppState;
}
