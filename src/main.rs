// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::application::news_gateway::NewsGateway;
use crate::infrastructure::config::{load_content_config, load_news_config};
use crate::infrastructure::news_api::NewsApiClient;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    close_page, dispatch_event, get_page, health_check, list_pages,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let news_config = load_news_config()?;
    let catalog = load_content_config()?.into_catalog()?;

    if news_config.news.api_key.is_none() {
        tracing::warn!("no news API key configured; the news feed will report a missing key");
    }

    // Create the gateway (infrastructure layer)
    let news_query = news_config.news.query.clone();
    let gateway: Arc<dyn NewsGateway> = Arc::new(NewsApiClient::new(news_config.news));

    // Create application state; page sessions mount on first visit
    let state = Arc::new(AppState::new(catalog, gateway, news_query));

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/pages", get(list_pages))
        .route("/pages/:page", get(get_page).delete(close_page))
        .route("/pages/:page/events", post(dispatch_event))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8080".parse()?;
    println!("Starting climate-insight service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
