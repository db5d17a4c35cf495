//! Root HTTP Routes
//!
//! The hello-world landing route and the health check.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Root-level routes
pub fn root_routes() -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
}

/// Landing route
async fn home_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "Hello": "World" })))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["version"], "0.1.0");
    }

    #[test]
    fn test_routes_build() {
        let _router = root_routes();
    }
}
