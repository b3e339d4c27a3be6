// rest_api/src/lib.rs

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use anyhow::Context;
use ingest::FeedClient;
use models::{Region, RiskAssessment};
use serde::Deserialize;
use serde_json::{Value, json};
use storage::BedStore;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

pub mod config;

use crate::config::ServerConfig;

#[derive(Debug, Error)]
pub enum RestApiError {
    #[error("{0}")]
    Validation(#[from] models::ValidationError),
    #[error("storage error: {0}")]
    Store(#[from] storage::StoreError),
}

impl IntoResponse for RestApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RestApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            RestApiError::Store(e) => {
                error!(error = %e, "storage failure while serving request");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = Json(json!({
            "status": "error",
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Shared state for the Axum application.
#[derive(Clone)]
pub struct AppState {
    store: Arc<BedStore>,
    feed: Arc<FeedClient>,
    target_regions: Arc<Vec<Region>>,
}

impl AppState {
    pub fn new(store: BedStore, feed: FeedClient, target_regions: Vec<Region>) -> Self {
        Self {
            store: Arc::new(store),
            feed: Arc::new(feed),
            target_regions: Arc::new(target_regions),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RiskIndexParams {
    province: Option<String>,
    district: Option<String>,
}

// Handler for the /api/v1/risk-index endpoint
async fn risk_index_handler(
    State(state): State<AppState>,
    Query(params): Query<RiskIndexParams>,
) -> Result<Json<RiskAssessment>, RestApiError> {
    let region = Region::new(
        params.province.unwrap_or_default(),
        params.district.unwrap_or_default(),
    )?;
    let records = state.store.records_for_region(&region)?;
    Ok(Json(engine::assess_records(&region, &records)))
}

// Handler for the /api/v1/data-sync endpoint
async fn data_sync_handler(
    State(state): State<AppState>,
) -> Result<Json<Value>, RestApiError> {
    let mut fetched = 0usize;
    let mut upserted = 0usize;
    let mut failed_regions = Vec::new();

    for region in state.target_regions.iter() {
        match state.feed.fetch_region(region).await {
            Ok(records) => {
                fetched += records.len();
                upserted += state.store.upsert_all(&records)?;
            }
            Err(e) => {
                warn!(region = %region, error = %e, "feed fetch failed; skipping region");
                failed_regions.push(region.to_string());
            }
        }
    }

    Ok(Json(json!({
        "status": "success",
        "regions": state.target_regions.len(),
        "fetched": fetched,
        "upserted": upserted,
        "failed_regions": failed_regions,
    })))
}

// Handler for the /api/v1/health endpoint
async fn health_check_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "message": "bed-risk REST API is healthy" })),
    )
}

// Handler for the /api/v1/version endpoint
async fn version_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "version": env!("CARGO_PKG_VERSION"), "api_level": 1 })),
    )
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any);

    Router::new()
        .route("/api/v1/risk-index", get(risk_index_handler))
        .route("/api/v1/data-sync", post(data_sync_handler))
        .route("/api/v1/health", get(health_check_handler))
        .route("/api/v1/version", get(version_handler))
        .with_state(state)
        .layer(cors)
}

/// Starts the REST API server and serves until ctrl-c.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), anyhow::Error> {
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.host, config.port))?;

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to address: {addr}"))?;
    info!("bed-risk REST API listening on {addr}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("REST API server failed")?;

    info!("REST API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received shutdown signal"),
        Err(e) => error!(error = %e, "failed to listen for shutdown signal"),
    }
}
