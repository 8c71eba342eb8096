use askama::Template;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use mars_core::{Error, ScrapeResult};
use std::sync::Arc;
use crate::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub mars: Option<ScrapeResult>,
}

/// Any fault reaching a handler becomes a plain-text 500.
pub struct AppError(Error);

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("❌ {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let mars = state.store.find_one().await?;
    let page = IndexTemplate { mars }
        .render()
        .map_err(|e| Error::External(e.into()))?;
    Ok(Html(page))
}

pub async fn scrape(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let mars = state.scraper.run().await?;
    state.store.upsert(&mars).await?;
    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]))
}
