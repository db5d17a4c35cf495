//! # persona HTTP Server Module
//!
//! Stateless request/response validation endpoints over axum.
//!
//! # Endpoints
//!
//! - `GET /` - Hello world
//! - `GET /health` - Health check
//! - `POST /person/new` - Validate and echo a person (201, password stripped)
//! - `GET /person/detail` - Validated query parameters
//! - `GET /person/detail/:person_id` - Validated path parameter
//! - `PUT /person/:person_id` - Validated path and body, echoed
//! - `POST /login` - Mock login, any credentials accepted

pub mod config;
pub mod login_routes;
pub mod person_routes;
pub mod root_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
