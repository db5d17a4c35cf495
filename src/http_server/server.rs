//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.
//!
//! Schemas are built once, before the listener binds; a bad constraint
//! table stops the server from starting at all.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::records::ApiSchemas;
use crate::schema::SpecResult;

use super::config::HttpServerConfig;
use super::login_routes::login_routes;
use super::person_routes::person_routes;
use super::root_routes::root_routes;

/// HTTP server for the persona API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration.
    ///
    /// # Errors
    ///
    /// Returns `SpecError` when a constraint table is malformed; this is a
    /// programming defect and the caller must not serve traffic.
    pub fn new() -> SpecResult<Self> {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> SpecResult<Self> {
        let router = Self::build_router(&config)?;
        Ok(Self { config, router })
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig) -> SpecResult<Router> {
        let schemas = Arc::new(ApiSchemas::build()?);

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Ok(Router::new()
            .merge(root_routes())
            .merge(login_routes(schemas.clone()))
            .nest("/person", person_routes(schemas))
            .layer(TraceLayer::new_for_http())
            .layer(cors))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}", e)))?;

        tracing::info!(%addr, "starting persona HTTP server");
        tracing::info!("health check: http://{}/health", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new().unwrap();
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config).unwrap();
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new().unwrap();
        let _router = server.router();
    }

    #[test]
    fn test_router_builds_with_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _server = HttpServer::with_config(config).unwrap();
    }
}
