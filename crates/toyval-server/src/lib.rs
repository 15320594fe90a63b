//! # Toyval Server
//!
//! Serves the reference Platform over HTTP.
//!
//! ## Endpoints
//!
//! - `POST /api/v1/evaluate`: body is a `Document`, response is the root's
//!   `ResultTable`; failures are `{"error": PlatformError}`
//! - `GET /health`, `GET /api/v1/health`
//!
//! ## Usage
//!
//! ```ignore
//! use toyval_server::Server;
//!
//! let server = Server::new(config.server);
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod handlers;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use toyval_config::ServerConfig;
use toyval_platform::LocalPlatform;

use crate::handlers::AppState;

/// The reference Platform server.
pub struct Server {
    config: ServerConfig,
    platform: Arc<LocalPlatform>,
}

impl Server {
    /// Create a new server with a fresh Platform.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_platform(config, Arc::new(LocalPlatform::new()))
    }

    /// Create a server over an existing Platform.
    pub fn with_platform(config: ServerConfig, platform: Arc<LocalPlatform>) -> Self {
        Self { config, platform }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let state = Arc::new(AppState {
            platform: Arc::clone(&self.platform),
            api_key: self.config.api_key.clone(),
        });

        routes::create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .bind_address()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        info!(
            %addr,
            auth = self.config.api_key.is_some(),
            "Starting Toyval Platform server"
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
