//! Location record.
//!
//! Declared in the catalog but bound to no HTTP endpoint; reachable through
//! `persona check --schema location`.

use serde::{Deserialize, Serialize};

use crate::schema::{FieldSpec, FieldType, RecordSchema, SpecResult};

/// A validated location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

fn place_field(name: &'static str) -> FieldSpec {
    FieldSpec::required(
        name,
        FieldType::String {
            min_len: 1,
            max_len: 50,
        },
    )
}

/// Constraint table for a location record.
pub fn location_schema() -> SpecResult<RecordSchema> {
    RecordSchema::build(
        "location",
        vec![
            place_field("city"),
            place_field("state"),
            place_field("country"),
        ],
    )
}
