//! Generic record validation.
//!
//! Validation semantics:
//! - Every declared field is checked, in declaration order; there is no
//!   short-circuit, so the caller receives the complete violation set.
//! - Absent optional fields take their declared default, or stay unset.
//! - Present values are coerced where the context allows it (numeric
//!   string to integer, "true"/"false" to boolean); coercion failure is a
//!   wrong-type violation, not a fault.
//! - Unknown input fields are ignored.
//! - An explicit JSON null reads as absent.
//!
//! The validator is a pure function of the schema and the input: no I/O,
//! no shared state, never panics on malformed input.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::errors::{ValidationFailure, ValidationResult, Violation};
use super::types::{FieldSpec, FieldType, FieldValue, RecordSchema};

/// How a declared field shows up in the raw input.
enum Presence<'a> {
    /// A non-null value was supplied
    Present(&'a Value),
    /// Nothing supplied, no default declared
    Absent,
    /// Nothing supplied; the declared default applies
    UseDefault(&'a FieldValue),
}

/// One field of a normalized record.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NormalizedField {
    name: String,
    value: FieldValue,
    sensitive: bool,
}

/// Input after successful coercion and default-filling.
///
/// Fields appear in schema declaration order. Sensitive fields (passwords)
/// are retained for programmatic access but omitted from [`Self::to_json`],
/// so they never reach an output representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    fields: Vec<NormalizedField>,
}

impl NormalizedRecord {
    /// Looks up a field value by name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    /// Returns true if no fields were set
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Public JSON view of the record, with sensitive fields stripped
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        for field in &self.fields {
            if !field.sensitive {
                out.insert(field.name.clone(), field.value.to_json());
            }
        }
        Value::Object(out)
    }
}

impl RecordSchema {
    /// Validates a raw JSON value against this schema.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailure` with the full ordered violation set when
    /// the input is not an object or any field breaches its constraints.
    pub fn validate(&self, input: &Value) -> ValidationResult<NormalizedRecord> {
        let obj = input.as_object().ok_or_else(|| {
            ValidationFailure::new(
                self.name(),
                vec![Violation::wrong_type(
                    "$root",
                    "object",
                    json_type_name(input),
                )],
            )
        })?;
        self.validate_object(obj)
    }

    /// Validates an already-deserialized JSON object against this schema.
    pub fn validate_object(&self, obj: &Map<String, Value>) -> ValidationResult<NormalizedRecord> {
        let mut violations = Vec::new();
        let mut fields = Vec::new();

        for spec in self.fields() {
            let presence = match obj.get(spec.name) {
                Some(value) if !value.is_null() => Presence::Present(value),
                _ => match &spec.default {
                    Some(default) => Presence::UseDefault(default),
                    None => Presence::Absent,
                },
            };

            match presence {
                Presence::Absent => {
                    if spec.required {
                        violations.push(Violation::missing(spec.name));
                    }
                }
                Presence::UseDefault(default) => {
                    fields.push(NormalizedField {
                        name: spec.name.to_string(),
                        value: default.clone(),
                        sensitive: spec.sensitive,
                    });
                }
                Presence::Present(value) => match coerce(spec, value) {
                    Ok(coerced) => fields.push(NormalizedField {
                        name: spec.name.to_string(),
                        value: coerced,
                        sensitive: spec.sensitive,
                    }),
                    Err(violation) => violations.push(violation),
                },
            }
        }

        if violations.is_empty() {
            Ok(NormalizedRecord { fields })
        } else {
            Err(ValidationFailure::new(self.name(), violations))
        }
    }
}

/// Coerces a raw value to the field's declared type and applies bounds.
fn coerce(spec: &FieldSpec, value: &Value) -> Result<FieldValue, Violation> {
    match &spec.field_type {
        FieldType::String { min_len, max_len } => {
            let s = value
                .as_str()
                .ok_or_else(|| Violation::wrong_type(spec.name, "string", json_type_name(value)))?;
            let len = s.chars().count();
            if len < *min_len || len > *max_len {
                return Err(Violation::string_length(spec.name, *min_len, *max_len, len));
            }
            Ok(FieldValue::Str(s.to_string()))
        }
        FieldType::Int { min, max } => {
            let n = coerce_int(spec.name, value)?;
            if n < *min || n > *max {
                return Err(Violation::int_range(spec.name, *min, *max));
            }
            Ok(FieldValue::Int(n))
        }
        FieldType::Bool => match value {
            Value::Bool(b) => Ok(FieldValue::Bool(*b)),
            Value::String(s) if s == "true" => Ok(FieldValue::Bool(true)),
            Value::String(s) if s == "false" => Ok(FieldValue::Bool(false)),
            other => Err(Violation::wrong_type(
                spec.name,
                "boolean",
                json_type_name(other),
            )),
        },
        FieldType::Enum { allowed } => {
            let tag = value
                .as_str()
                .ok_or_else(|| Violation::wrong_type(spec.name, "string", json_type_name(value)))?;
            if !allowed.contains(&tag) {
                return Err(Violation::not_in_set(spec.name, allowed));
            }
            Ok(FieldValue::Str(tag.to_string()))
        }
        FieldType::Email => {
            let s = value
                .as_str()
                .ok_or_else(|| Violation::wrong_type(spec.name, "string", json_type_name(value)))?;
            if !email_regex().is_match(s) {
                return Err(Violation::bad_email(spec.name));
            }
            Ok(FieldValue::Str(s.to_string()))
        }
    }
}

/// Coerces a raw value to i64. Numeric strings are accepted (query and
/// form contexts deliver every scalar as a string); floats are not.
fn coerce_int(field: &str, value: &Value) -> Result<i64, Violation> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    if value.is_u64() {
        // Above i64::MAX, so above any permitted bound.
        return Err(Violation::new(field, "integer out of range"));
    }
    if value.is_number() {
        return Err(Violation::wrong_type(field, "integer", "float"));
    }
    if let Some(s) = value.as_str() {
        return s
            .trim()
            .parse::<i64>()
            .map_err(|_| Violation::wrong_type(field, "integer", "string"));
    }
    Err(Violation::wrong_type(field, "integer", json_type_name(value)))
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$")
            .expect("email pattern is a valid regex")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> RecordSchema {
        RecordSchema::build(
            "sample",
            vec![
                FieldSpec::required(
                    "name",
                    FieldType::String {
                        min_len: 1,
                        max_len: 50,
                    },
                ),
                FieldSpec::required("email", FieldType::Email),
                FieldSpec::required("age", FieldType::Int { min: 1, max: 115 }),
                FieldSpec::optional(
                    "hair_color",
                    FieldType::Enum {
                        allowed: &["white", "brown", "black", "blonde", "red"],
                    },
                ),
                FieldSpec::optional("is_married", FieldType::Bool),
                FieldSpec::required(
                    "password",
                    FieldType::String {
                        min_len: 8,
                        max_len: usize::MAX,
                    },
                )
                .sensitive(),
            ],
        )
        .unwrap()
    }

    fn valid_input() -> Value {
        json!({
            "name": "Juan",
            "email": "juan@gmail.com",
            "age": 21,
            "hair_color": "black",
            "is_married": true,
            "password": "hunter2hunter2"
        })
    }

    #[test]
    fn test_valid_input_normalizes() {
        let record = sample_schema().validate(&valid_input()).unwrap();

        assert_eq!(record.get("name").unwrap().as_str(), Some("Juan"));
        assert_eq!(record.get("age").unwrap().as_int(), Some(21));
        assert_eq!(record.get("hair_color").unwrap().as_str(), Some("black"));
        assert_eq!(record.get("is_married").unwrap().as_bool(), Some(true));
    }

    #[test]
    fn test_numeric_string_coerces_to_int() {
        let mut input = valid_input();
        input["age"] = json!("25");

        let record = sample_schema().validate(&input).unwrap();
        assert_eq!(record.get("age").unwrap().as_int(), Some(25));
    }

    #[test]
    fn test_bool_string_coerces() {
        let mut input = valid_input();
        input["is_married"] = json!("false");

        let record = sample_schema().validate(&input).unwrap();
        assert_eq!(record.get("is_married").unwrap().as_bool(), Some(false));
    }

    #[test]
    fn test_float_is_not_an_int() {
        let mut input = valid_input();
        input["age"] = json!(21.5);

        let failure = sample_schema().validate(&input).unwrap_err();
        assert_eq!(failure.violations().len(), 1);
        assert!(failure.violations()[0].reason.contains("float"));
    }

    #[test]
    fn test_missing_fields_all_reported() {
        let failure = sample_schema().validate(&json!({})).unwrap_err();

        // name, email, age, password: one entry each, declaration order.
        let fields: Vec<_> = failure
            .violations()
            .iter()
            .map(|v| v.field.as_str())
            .collect();
        assert_eq!(fields, vec!["name", "email", "age", "password"]);
        for violation in failure.violations() {
            assert!(violation.reason.contains("missing"));
        }
    }

    #[test]
    fn test_no_short_circuit_mixes_violation_kinds() {
        let input = json!({
            "name": "",
            "email": "not-an-email",
            "age": 0,
            "hair_color": "purple",
            "password": "short"
        });

        let failure = sample_schema().validate(&input).unwrap_err();
        assert_eq!(failure.violations().len(), 5);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let mut input = valid_input();
        input["favorite_pizza"] = json!("margherita");

        let record = sample_schema().validate(&input).unwrap();
        assert!(record.get("favorite_pizza").is_none());
    }

    #[test]
    fn test_null_reads_as_absent() {
        let mut input = valid_input();
        input["hair_color"] = Value::Null;
        assert!(sample_schema().validate(&input).is_ok());

        let mut input = valid_input();
        input["name"] = Value::Null;
        let failure = sample_schema().validate(&input).unwrap_err();
        assert!(failure.violations()[0].reason.contains("missing"));
    }

    #[test]
    fn test_default_fills_absent_optional() {
        let schema = RecordSchema::build(
            "sample",
            vec![FieldSpec::optional("is_married", FieldType::Bool)
                .with_default(FieldValue::Bool(false))],
        )
        .unwrap();

        let record = schema.validate(&json!({})).unwrap();
        assert_eq!(record.get("is_married").unwrap().as_bool(), Some(false));
    }

    #[test]
    fn test_non_object_root_rejected() {
        let failure = sample_schema().validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(failure.violations()[0].field, "$root");
        assert!(failure.violations()[0].reason.contains("array"));
    }

    #[test]
    fn test_sensitive_field_stripped_from_json() {
        let record = sample_schema().validate(&valid_input()).unwrap();
        let out = record.to_json();

        assert!(out.get("password").is_none());
        assert_eq!(out["name"], "Juan");
        // Still reachable programmatically.
        assert_eq!(
            record.get("password").unwrap().as_str(),
            Some("hunter2hunter2")
        );
    }

    #[test]
    fn test_age_boundaries() {
        let schema = sample_schema();
        for (age, ok) in [(0, false), (1, true), (115, true), (116, false)] {
            let mut input = valid_input();
            input["age"] = json!(age);
            assert_eq!(schema.validate(&input).is_ok(), ok, "age {}", age);
        }
    }

    #[test]
    fn test_string_length_boundaries() {
        let schema = sample_schema();
        for (len, ok) in [(0, false), (1, true), (50, true), (51, false)] {
            let mut input = valid_input();
            input["name"] = json!("x".repeat(len));
            assert_eq!(schema.validate(&input).is_ok(), ok, "length {}", len);
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut input = valid_input();
        input["name"] = json!("ñ".repeat(50));
        assert!(sample_schema().validate(&input).is_ok());
    }

    #[test]
    fn test_enum_tags() {
        let schema = sample_schema();

        let mut input = valid_input();
        input["hair_color"] = json!("blonde");
        assert!(schema.validate(&input).is_ok());

        input["hair_color"] = json!("purple");
        let failure = schema.validate(&input).unwrap_err();
        let reason = &failure.violations()[0].reason;
        for tag in ["white", "brown", "black", "blonde", "red"] {
            assert!(reason.contains(tag), "reason should name '{}'", tag);
        }
    }

    #[test]
    fn test_email_syntax() {
        let schema = sample_schema();
        let cases = [
            ("juan@gmail.com", true),
            ("fer@sub.example.co", true),
            ("no-at-sign", false),
            ("two@@signs.com", false),
            ("trailing@dot.", false),
            ("@missing-local.com", false),
        ];
        for (email, ok) in cases {
            let mut input = valid_input();
            input["email"] = json!(email);
            assert_eq!(schema.validate(&input).is_ok(), ok, "email {}", email);
        }
    }

    #[test]
    fn test_huge_unsigned_is_out_of_range() {
        let mut input = valid_input();
        input["age"] = json!(u64::MAX);
        assert!(sample_schema().validate(&input).is_err());
    }

    #[test]
    fn test_idempotent_on_normalized_output() {
        // Validate, echo, validate the echo against the password-free view.
        let schema = sample_schema();
        let echo_schema = RecordSchema::build(
            "sample_out",
            vec![
                FieldSpec::required(
                    "name",
                    FieldType::String {
                        min_len: 1,
                        max_len: 50,
                    },
                ),
                FieldSpec::required("email", FieldType::Email),
                FieldSpec::required("age", FieldType::Int { min: 1, max: 115 }),
                FieldSpec::optional(
                    "hair_color",
                    FieldType::Enum {
                        allowed: &["white", "brown", "black", "blonde", "red"],
                    },
                ),
                FieldSpec::optional("is_married", FieldType::Bool),
            ],
        )
        .unwrap();

        let first = schema.validate(&valid_input()).unwrap();
        let echoed = first.to_json();
        let second = echo_schema.validate(&echoed).unwrap();

        assert_eq!(second.to_json(), echoed);
    }
}
