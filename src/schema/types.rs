//! Constraint table definitions.
//!
//! A record schema is an ordered list of field specs consumed by a single
//! generic validation routine, instead of per-field logic scattered across
//! types. Schemas are pure data; building one checks the specification
//! itself and rejects contradictory tables up front.

use serde_json::Value;

use super::errors::{SpecError, SpecResult};

/// Supported field types with their type-specific bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string with inclusive character-length bounds.
    ///
    /// Use `usize::MAX` as `max_len` for a field with no upper bound.
    String {
        /// Minimum length in characters
        min_len: usize,
        /// Maximum length in characters
        max_len: usize,
    },
    /// 64-bit signed integer with inclusive bounds
    Int {
        /// Smallest accepted value
        min: i64,
        /// Largest accepted value
        max: i64,
    },
    /// Boolean
    Bool,
    /// Closed set of string tags
    Enum {
        /// Permitted tags, in canonical order
        allowed: &'static [&'static str],
    },
    /// Syntactically valid email address
    Email,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String { .. } => "string",
            FieldType::Int { .. } => "integer",
            FieldType::Bool => "boolean",
            FieldType::Enum { .. } => "enum",
            FieldType::Email => "email",
        }
    }
}

/// A normalized, typed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// String, enum tag, or email value
    Str(String),
    /// Integer value
    Int(i64),
    /// Boolean value
    Bool(bool),
}

impl FieldValue {
    /// Returns the string content, if this is a string-like value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content, if this is an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Converts the value back to JSON
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Str(s) => Value::String(s.clone()),
            FieldValue::Int(i) => Value::from(*i),
            FieldValue::Bool(b) => Value::Bool(*b),
        }
    }

    /// Returns true if the value's shape matches the given field type.
    ///
    /// Bounds are not checked here; this is only used to reject defaults
    /// of the wrong shape when a schema is built.
    pub fn matches(&self, field_type: &FieldType) -> bool {
        matches!(
            (self, field_type),
            (FieldValue::Str(_), FieldType::String { .. })
                | (FieldValue::Str(_), FieldType::Enum { .. })
                | (FieldValue::Str(_), FieldType::Email)
                | (FieldValue::Int(_), FieldType::Int { .. })
                | (FieldValue::Bool(_), FieldType::Bool)
        )
    }
}

/// A single field's constraint specification.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Field name as it appears in the input
    pub name: &'static str,
    /// Field data type and bounds
    pub field_type: FieldType,
    /// Whether the field must be present
    pub required: bool,
    /// Declared default, assigned when an optional field is absent
    pub default: Option<FieldValue>,
    /// Sensitive fields are validated but stripped from public output
    pub sensitive: bool,
}

impl FieldSpec {
    /// Create a required field
    pub fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: true,
            default: None,
            sensitive: false,
        }
    }

    /// Create an optional field with no default
    pub fn optional(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: false,
            default: None,
            sensitive: false,
        }
    }

    /// Attach a default value assigned when the field is absent
    pub fn with_default(mut self, default: FieldValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Mark the field as sensitive (never echoed in public output)
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// A named, ordered field-constraint table.
///
/// Declaration order is significant: violations are reported in the order
/// fields are declared.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    name: &'static str,
    fields: Vec<FieldSpec>,
}

impl RecordSchema {
    /// Build a schema, checking the constraint specification itself.
    ///
    /// # Errors
    ///
    /// Returns `SpecError` for duplicate field names, contradictory bounds
    /// (min above max), an empty or duplicated enum tag set, a default on a
    /// required field, or a default whose shape does not match the field
    /// type. These are programming defects and abort startup.
    pub fn build(name: &'static str, fields: Vec<FieldSpec>) -> SpecResult<Self> {
        for (i, spec) in fields.iter().enumerate() {
            if fields[..i].iter().any(|other| other.name == spec.name) {
                return Err(SpecError::duplicate_field(name, spec.name));
            }

            match &spec.field_type {
                FieldType::String { min_len, max_len } => {
                    if min_len > max_len {
                        return Err(SpecError::contradictory_bounds(
                            name,
                            spec.name,
                            format!("min length {} exceeds max length {}", min_len, max_len),
                        ));
                    }
                }
                FieldType::Int { min, max } => {
                    if min > max {
                        return Err(SpecError::contradictory_bounds(
                            name,
                            spec.name,
                            format!("min {} exceeds max {}", min, max),
                        ));
                    }
                }
                FieldType::Enum { allowed } => {
                    if allowed.is_empty() {
                        return Err(SpecError::empty_enum(name, spec.name));
                    }
                    for (j, tag) in allowed.iter().enumerate() {
                        if allowed[..j].contains(tag) {
                            return Err(SpecError::contradictory_bounds(
                                name,
                                spec.name,
                                format!("duplicate enum tag '{}'", tag),
                            ));
                        }
                    }
                }
                FieldType::Bool | FieldType::Email => {}
            }

            if let Some(default) = &spec.default {
                if spec.required {
                    return Err(SpecError::bad_default(
                        name,
                        spec.name,
                        "required fields never use a default",
                    ));
                }
                if !default.matches(&spec.field_type) {
                    return Err(SpecError::bad_default(
                        name,
                        spec.name,
                        format!(
                            "default does not match declared type '{}'",
                            spec.field_type.type_name()
                        ),
                    ));
                }
            }
        }

        Ok(Self { name, fields })
    }

    /// Returns the schema name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field specs in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field spec by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }
}
