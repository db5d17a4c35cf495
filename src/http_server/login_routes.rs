//! Login HTTP Routes
//!
//! One mock endpoint: any well-formed credentials are accepted and a fixed
//! success message is returned. No sessions, no tokens, no credential
//! store.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use crate::records::{ApiSchemas, LoginResult};
use crate::schema::FieldValue;

use super::person_routes::{raw_params, reject, ValidationErrorResponse};

/// Login routes, mounted at the root
pub fn login_routes(schemas: Arc<ApiSchemas>) -> Router {
    Router::new()
        .route("/login", post(login))
        .with_state(schemas)
}

/// `POST /login`: urlencoded form, mock success for any credentials.
async fn login(
    State(schemas): State<Arc<ApiSchemas>>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<LoginResult>, (StatusCode, Json<ValidationErrorResponse>)> {
    let record = schemas
        .login
        .validate_object(&raw_params(form))
        .map_err(reject)?;

    // The password was validated for presence; it goes no further.
    let username = record
        .get("username")
        .and_then(FieldValue::as_str)
        .unwrap_or_default();

    Ok(Json(LoginResult::new(username)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_build() {
        let schemas = Arc::new(ApiSchemas::build().unwrap());
        let _router = login_routes(schemas);
    }
}
