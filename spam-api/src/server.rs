//! API Server - HTTP server exposing classification results

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::error::Result;
use crate::handlers;
use crate::state::AppState;

/// API server
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(config: ApiConfig) -> Self {
        let addr = config.server.listen_addr.clone();
        Self {
            state: Arc::new(AppState::new(config)),
            addr,
        }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Train if configured to, then serve until the listener fails
    pub async fn run(&self) -> Result<()> {
        if self.state.config().server.train_on_startup {
            self.state.detection().await?;
        }

        info!("Starting API server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}

/// Build the application router over shared state
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(state.config().server.allowed_origin.as_deref());

    let spam_routes = Router::new()
        .route("/spam", get(handlers::spam_results))
        .route("/spam/accuracy", get(handlers::accuracy))
        .route("/spam/precision", get(handlers::precision))
        .route("/spam/report", get(handlers::report))
        .route("/spam/classify", post(handlers::classify));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", spam_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    match allowed_origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => cors.allow_origin(origin),
        Some(Err(e)) => {
            warn!("Invalid allowed origin, cross-origin requests are refused: {}", e);
            cors
        }
        None => cors.allow_origin(Any),
    }
}
