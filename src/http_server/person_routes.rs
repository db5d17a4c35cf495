//! Person HTTP Routes
//!
//! Request/response validation endpoints for person records. Every handler
//! validates its raw input against a constraint table and echoes the
//! normalized result; there is no storage behind any of them.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Router,
};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::records::{ApiSchemas, PersonRecord};
use crate::schema::{FieldValue, ValidationFailure, Violation};

/// Person routes, nested under `/person`
pub fn person_routes(schemas: Arc<ApiSchemas>) -> Router {
    Router::new()
        .route("/new", post(create_person))
        .route("/detail", get(show_person))
        .route("/detail/:person_id", get(show_person_by_id))
        .route("/:person_id", put(update_person))
        .with_state(schemas)
}

/// Client-error body enumerating every violation in declaration order.
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

/// Maps a validation failure to a 422 with the full violation report.
pub fn reject(failure: ValidationFailure) -> (StatusCode, Json<ValidationErrorResponse>) {
    let error = format!("validation of '{}' failed", failure.record());
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationErrorResponse {
            error,
            violations: failure.into_violations(),
        }),
    )
}

/// A validated record that does not match its own model is a bug, not bad
/// input.
fn internal() -> (StatusCode, Json<ValidationErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ValidationErrorResponse {
            error: "normalized record did not match the person model".to_string(),
            violations: Vec::new(),
        }),
    )
}

/// Lifts string-valued transport parameters (query, path, form) into a JSON
/// object for the validator, which handles type coercion.
pub fn raw_params(params: HashMap<String, String>) -> Map<String, Value> {
    params
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect()
}

/// `POST /person/new`: validate a person and echo it without the password.
async fn create_person(
    State(schemas): State<Arc<ApiSchemas>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<PersonRecord>), (StatusCode, Json<ValidationErrorResponse>)> {
    let record = schemas.person.validate(&body).map_err(reject)?;
    let person = PersonRecord::from_normalized(&record).ok_or_else(internal)?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// `GET /person/detail`: validated query parameters, echoed back.
///
/// Query values arrive as strings; `age` comes back as an integer.
async fn show_person(
    State(schemas): State<Arc<ApiSchemas>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, (StatusCode, Json<ValidationErrorResponse>)> {
    let record = schemas
        .person_query
        .validate_object(&raw_params(params))
        .map_err(reject)?;

    let name = record
        .get("name")
        .and_then(FieldValue::as_str)
        .map(str::to_owned);
    let age = record
        .get("age")
        .and_then(FieldValue::as_int)
        .ok_or_else(internal)?;

    Ok(Json(json!({ "name": name, "age": age })))
}

/// `GET /person/detail/:person_id`: a positive integer id.
async fn show_person_by_id(
    State(schemas): State<Arc<ApiSchemas>>,
    Path(person_id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<ValidationErrorResponse>)> {
    let mut params = Map::new();
    params.insert("person_id".to_string(), Value::String(person_id));

    let record = schemas
        .person_detail
        .validate_object(&params)
        .map_err(reject)?;
    let id = record
        .get("person_id")
        .and_then(FieldValue::as_int)
        .ok_or_else(internal)?;

    let mut out = Map::new();
    out.insert(id.to_string(), Value::String("It exists!".to_string()));
    Ok(Json(Value::Object(out)))
}

/// `PUT /person/:person_id`: validate the path id and the body together,
/// reporting violations from both in one pass.
async fn update_person(
    State(schemas): State<Arc<ApiSchemas>>,
    Path(person_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<PersonRecord>, (StatusCode, Json<ValidationErrorResponse>)> {
    let mut violations = Vec::new();

    let mut params = Map::new();
    params.insert("person_id".to_string(), Value::String(person_id));
    let path_record = match schemas.person_detail.validate_object(&params) {
        Ok(record) => Some(record),
        Err(failure) => {
            violations.extend(failure.into_violations());
            None
        }
    };

    let body_record = match schemas.person.validate(&body) {
        Ok(record) => Some(record),
        Err(failure) => {
            violations.extend(failure.into_violations());
            None
        }
    };

    if !violations.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorResponse {
                error: "validation of 'person' failed".to_string(),
                violations,
            }),
        ));
    }

    // Both records exist when no violations were collected.
    let record = body_record.ok_or_else(internal)?;
    if let Some(path_record) = path_record {
        if let Some(id) = path_record.get("person_id").and_then(FieldValue::as_int) {
            tracing::debug!(person_id = id, "person update echoed");
        }
    }

    let person = PersonRecord::from_normalized(&record).ok_or_else(internal)?;
    Ok(Json(person))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_params_lifts_strings() {
        let mut params = HashMap::new();
        params.insert("age".to_string(), "25".to_string());

        let raw = raw_params(params);
        assert_eq!(raw.get("age"), Some(&Value::String("25".to_string())));
    }

    #[test]
    fn test_reject_is_unprocessable_entity() {
        let failure = ValidationFailure::new("person", vec![Violation::missing("age")]);
        let (status, Json(body)) = reject(failure);

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.violations.len(), 1);
        assert!(body.error.contains("person"));
    }

    #[test]
    fn test_routes_build() {
        let schemas = Arc::new(ApiSchemas::build().unwrap());
        let _router = person_routes(schemas);
    }
}
