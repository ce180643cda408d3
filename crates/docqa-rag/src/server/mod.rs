//! HTTP server for the document Q&A service

pub mod routes;
pub mod state;

use axum::{extract::State, response::Html, routing::get, Router};
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::error::Result;
use state::AppState;

/// Document Q&A HTTP server
pub struct QaServer {
    config: AppConfig,
    state: AppState,
}

impl QaServer {
    /// Create a new server
    pub fn new(config: AppConfig) -> Result<Self> {
        let state = AppState::new(config.clone())?;
        Ok(Self { config, state })
    }

    /// Build the router with all routes
    fn build_router(&self) -> Router {
        let router = Router::new()
            // Frontend page
            .route("/", get(home))
            // Health check
            .route("/health", get(health_check))
            // Frontend assets
            .nest_service("/static", ServeDir::new(&self.config.storage.static_dir))
            // Application routes with body limit for multipart uploads
            .merge(routes::app_routes(self.config.server.max_upload_size))
            .with_state(self.state.clone())
            // Middleware layers (order matters - applied bottom to top)
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new());

        if self.config.server.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router.layer(cors)
        } else {
            router
        }
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.server.host, self.config.server.port)
            .parse()
            .map_err(|e| {
                crate::error::Error::invalid_configuration(format!("Invalid address: {}", e))
            })?;

        let router = self.build_router();

        tracing::info!("Starting Q&A server on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            crate::error::Error::invalid_configuration(format!("Failed to bind: {}", e))
        })?;

        axum::serve(listener, router)
            .await
            .map_err(|e| crate::error::Error::Internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }
}

/// Serve the frontend page
async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let index_path = state.config().storage.static_dir.join("index.html");
    let html = tokio::fs::read_to_string(&index_path).await?;
    Ok(Html(html))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
