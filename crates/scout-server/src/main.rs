use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, header};
use tokio::net::TcpListener;
use tower_governor::GovernorLayer;
use tower_governor::governor::GovernorConfigBuilder;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use url::Url;

use scout_client::ReqwestFetcher;
use scout_core::{QueryUrlBuilder, ResultCache, ScrapeConfig, ScrapePipeline};
use scout_server::routes;
use scout_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("scout=info".parse()?))
        .with_target(false)
        .init();

    let port = std::env::var("SCOUT_PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");

    let config = ScrapeConfig::default();
    let urls = match std::env::var("SCOUT_SEARCH_BASE_URL") {
        Ok(base) => QueryUrlBuilder::new(Url::parse(&base)?),
        Err(_) => QueryUrlBuilder::default(),
    };

    let fetcher = ReqwestFetcher::new(&config)?;
    let cache = Arc::new(ResultCache::new(config.cache_ttl));
    let state = Arc::new(AppState {
        pipeline: ScrapePipeline::new(fetcher, urls, cache, config),
    });

    // 10 requests per rolling 60 seconds per client IP: one token every
    // 6 seconds with a burst of 10.
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(6)
            .burst_size(10)
            .finish()
            .expect("valid rate limiter config"),
    );

    let app = routes::router(state)
        .layer(GovernorLayer::new(governor_config))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ));

    tracing::info!("Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    tracing::info!("Shutdown signal received");
}
