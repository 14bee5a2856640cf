// SPDX-License-Identifier: MPL-2.0
//! HTTP server.
//!
//! | Method | Path             | Handler                          |
//! |--------|------------------|----------------------------------|
//! | GET    | `/`              | [`handlers::root`]               |
//! | POST   | `/verify/news`   | [`handlers::verify_news`]        |
//! | POST   | `/verify/claim`  | [`handlers::verify_claim`]       |
//! | POST   | `/verify/image`  | [`handlers::verify_image_url`]   |
//! | POST   | `/upload/image`  | [`handlers::upload_image`]       |
//!
//! All routes accept cross-origin requests from any origin.

pub mod dto;
pub mod handlers;

use crate::application::port::{ClaimChecker, TagExtractor};
use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::{ExifTagExtractor, OpenAiClaimChecker};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared handler state. Cloned per request; adapters are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn TagExtractor>,
    pub claim_checker: Arc<dyn ClaimChecker>,
    pub staging_dir: Option<PathBuf>,
}

impl AppState {
    /// Builds the production adapters from the config.
    ///
    /// # Errors
    ///
    /// Returns an error if the LLM HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let checker = OpenAiClaimChecker::new(&config.llm)?;
        if !checker.has_api_key() {
            tracing::warn!("no LLM API key configured; /verify/claim will report errors");
        }
        Ok(Self {
            extractor: Arc::new(ExifTagExtractor::new()),
            claim_checker: Arc::new(checker),
            staging_dir: config.upload.staging_dir.clone(),
        })
    }
}

/// Builds the router with CORS, request tracing and the body size limit.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/verify/news", post(handlers::verify_news))
        .route("/verify/claim", post(handlers::verify_claim))
        .route("/verify/image", post(handlers::verify_image_url))
        .route("/upload/image", post(handlers::upload_image))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the config is invalid, the address cannot be bound,
/// or the server fails.
pub async fn serve(config: &Config) -> Result<()> {
    config.validate()?;
    let addr = config.bind_addr()?;
    let state = AppState::from_config(config)?;
    let app = router(state, config.server.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "TruthCheck backend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
