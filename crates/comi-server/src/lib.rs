//! # Comi Server
//!
//! REST server for the Comi loan calculator.
//!
//! ## Endpoints
//!
//! - `POST /api/calculate` - monthly payment, totals and amortization schedule
//! - `POST /api/schedule-csv` - the schedule as a CSV download
//! - `POST /api/generate-ticket` - payment ticket rendered as a QR data URL
//! - `GET /health` - liveness
//!
//! ## Usage
//!
//! ```ignore
//! use comi_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default().with_env_overrides());
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;
pub use error::ApiError;

/// The Comi server.
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(self.config.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(
            self.config.host.parse().unwrap_or([0, 0, 0, 0].into()),
            self.config.port,
        );

        info!("Starting Comi server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
