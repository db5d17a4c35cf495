//! Schema catalog.
//!
//! All constraint tables are built once at startup; any `SpecError` here is
//! a programming defect and must abort the process before it serves traffic.

use crate::schema::{RecordSchema, SpecResult};

use super::location::location_schema;
use super::login::login_schema;
use super::person::{person_detail_schema, person_out_schema, person_query_schema, person_schema};

/// The built, named schemas served by the API and the CLI.
#[derive(Debug, Clone)]
pub struct ApiSchemas {
    /// Create/update person schema (includes the sensitive password)
    pub person: RecordSchema,
    /// Public echo view of a person
    pub person_out: RecordSchema,
    /// Query parameters for `GET /person/detail`
    pub person_query: RecordSchema,
    /// Path parameter for person-by-id routes
    pub person_detail: RecordSchema,
    /// Mock login form
    pub login: RecordSchema,
    /// Location record (no endpoint binds it)
    pub location: RecordSchema,
}

impl ApiSchemas {
    /// Builds every schema in the catalog, failing fast on a bad table.
    pub fn build() -> SpecResult<Self> {
        Ok(Self {
            person: person_schema()?,
            person_out: person_out_schema()?,
            person_query: person_query_schema()?,
            person_detail: person_detail_schema()?,
            login: login_schema()?,
            location: location_schema()?,
        })
    }

    /// Looks up a schema by its name
    pub fn get(&self, name: &str) -> Option<&RecordSchema> {
        match name {
            "person" => Some(&self.person),
            "person_out" => Some(&self.person_out),
            "person_query" => Some(&self.person_query),
            "person_detail" => Some(&self.person_detail),
            "login" => Some(&self.login),
            "location" => Some(&self.location),
            _ => None,
        }
    }

    /// Names of every schema in the catalog
    pub fn names() -> &'static [&'static str] {
        &[
            "person",
            "person_out",
            "person_query",
            "person_detail",
            "login",
            "location",
        ]
    }
}
