//! Person record model and constraint tables.

use serde::{Deserialize, Serialize};

use crate::schema::{FieldSpec, FieldType, NormalizedRecord, RecordSchema, SpecResult};

/// Closed set of recognized hair colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    White,
    Brown,
    Black,
    Blonde,
    Red,
}

impl HairColor {
    /// Permitted tags, in canonical order
    pub const TAGS: &'static [&'static str] = &["white", "brown", "black", "blonde", "red"];

    /// Parses a tag; unknown tags are ordinary validation failures upstream
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "white" => Some(Self::White),
            "brown" => Some(Self::Brown),
            "black" => Some(Self::Black),
            "blonde" => Some(Self::Blonde),
            "red" => Some(Self::Red),
            _ => None,
        }
    }

    /// Returns the canonical tag
    pub fn tag(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Brown => "brown",
            Self::Black => "black",
            Self::Blonde => "blonde",
            Self::Red => "red",
        }
    }
}

/// A validated person, as echoed back by the API.
///
/// There is no password field: the create/update schema validates one, but
/// it never reaches an output representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<HairColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_married: Option<bool>,
}

impl PersonRecord {
    /// Builds the typed model from a normalized record.
    ///
    /// Returns `None` if the record does not carry the person fields with
    /// the expected types; with a record validated against the person
    /// schema this cannot happen, so a `None` indicates a bug upstream.
    pub fn from_normalized(record: &NormalizedRecord) -> Option<Self> {
        Some(Self {
            first_name: record.get("first_name")?.as_str()?.to_string(),
            last_name: record.get("last_name")?.as_str()?.to_string(),
            email: record.get("email")?.as_str()?.to_string(),
            age: record.get("age")?.as_int()?,
            hair_color: match record.get("hair_color") {
                Some(value) => Some(HairColor::from_tag(value.as_str()?)?),
                None => None,
            },
            is_married: match record.get("is_married") {
                Some(value) => Some(value.as_bool()?),
                None => None,
            },
        })
    }
}

fn name_field(name: &'static str) -> FieldSpec {
    FieldSpec::required(
        name,
        FieldType::String {
            min_len: 1,
            max_len: 50,
        },
    )
}

fn base_fields() -> Vec<FieldSpec> {
    vec![
        name_field("first_name"),
        name_field("last_name"),
        FieldSpec::required("email", FieldType::Email),
        FieldSpec::required("age", FieldType::Int { min: 1, max: 115 }),
        FieldSpec::optional(
            "hair_color",
            FieldType::Enum {
                allowed: HairColor::TAGS,
            },
        ),
        FieldSpec::optional("is_married", FieldType::Bool),
    ]
}

/// Create/update schema: base fields plus a sensitive password.
pub fn person_schema() -> SpecResult<RecordSchema> {
    let mut fields = base_fields();
    fields.push(
        FieldSpec::required(
            "password",
            FieldType::String {
                min_len: 8,
                max_len: usize::MAX,
            },
        )
        .sensitive(),
    );
    RecordSchema::build("person", fields)
}

/// Echo schema: the public view, no password declared at all.
pub fn person_out_schema() -> SpecResult<RecordSchema> {
    RecordSchema::build("person_out", base_fields())
}

/// Query-parameter schema for `GET /person/detail`.
///
/// Query values arrive as strings; `age` is coerced to an integer by the
/// validator.
pub fn person_query_schema() -> SpecResult<RecordSchema> {
    RecordSchema::build(
        "person_query",
        vec![
            FieldSpec::optional(
                "name",
                FieldType::String {
                    min_len: 1,
                    max_len: 50,
                },
            ),
            FieldSpec::required("age", FieldType::Int { min: 1, max: 115 }),
        ],
    )
}

/// Path-parameter schema: a positive person id.
pub fn person_detail_schema() -> SpecResult<RecordSchema> {
    RecordSchema::build(
        "person_detail",
        vec![FieldSpec::required(
            "person_id",
            FieldType::Int {
                min: 1,
                max: i64::MAX,
            },
        )],
    )
}
