//! Schema error types.
//!
//! Two kinds, deliberately kept apart:
//! - `ValidationFailure` (REJECT): bad input, expected and recoverable,
//!   always carries the complete ordered violation set.
//! - `SpecError` (FATAL): a malformed constraint specification, which is a
//!   programming defect and aborts schema construction at startup.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A single (field, reason) pair describing why input failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Field name, or `$root` for the record itself
    pub field: String,
    /// Human-readable reason naming the breached constraint
    pub reason: String,
}

impl Violation {
    /// Generic violation with an explicit reason
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Required field absent from the input
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "required field is missing")
    }

    /// Value could not be coerced to the declared type
    pub fn wrong_type(field: impl Into<String>, expected: &str, actual: &str) -> Self {
        Self::new(field, format!("expected {}, got {}", expected, actual))
    }

    /// String length outside the declared bounds
    pub fn string_length(field: impl Into<String>, min_len: usize, max_len: usize, actual: usize) -> Self {
        let bound = if max_len == usize::MAX {
            format!("at least {} characters", min_len)
        } else if min_len == 0 {
            format!("at most {} characters", max_len)
        } else {
            format!("between {} and {} characters", min_len, max_len)
        };
        Self::new(field, format!("length must be {}, got {}", bound, actual))
    }

    /// Integer outside the declared inclusive bounds
    pub fn int_range(field: impl Into<String>, min: i64, max: i64) -> Self {
        let bound = if max == i64::MAX {
            format!("at least {}", min)
        } else if min == i64::MIN {
            format!("at most {}", max)
        } else {
            format!("between {} and {}", min, max)
        };
        Self::new(field, format!("must be {}", bound))
    }

    /// Tag not in the permitted enum set; the reason names the full set
    pub fn not_in_set(field: impl Into<String>, allowed: &[&str]) -> Self {
        Self::new(
            field,
            format!("must be one of: {}", allowed.join(", ")),
        )
    }

    /// String is not a syntactically valid email address
    pub fn bad_email(field: impl Into<String>) -> Self {
        Self::new(field, "not a valid email address")
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': {}", self.field, self.reason)
    }
}

/// Validation failure: a non-empty, ordered list of violations.
///
/// Ordering follows field declaration order; every declared field is checked
/// even after an earlier failure, so the caller always sees the complete set.
#[derive(Debug, Clone)]
pub struct ValidationFailure {
    record: String,
    violations: Vec<Violation>,
}

impl ValidationFailure {
    /// Create a failure for the named record schema
    pub fn new(record: impl Into<String>, violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self {
            record: record.into(),
            violations,
        }
    }

    /// Returns the record schema name the input was validated against
    pub fn record(&self) -> &str {
        &self.record
    }

    /// Returns the violations in declaration order
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the failure, yielding the violations
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// JSON violation report: an ordered array of `{field, reason}` objects
    pub fn report(&self) -> Value {
        serde_json::to_value(&self.violations).unwrap_or(Value::Array(Vec::new()))
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "validation of '{}' failed with {} violation(s)",
            self.record,
            self.violations.len()
        )?;
        for violation in &self.violations {
            write!(f, "; {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationFailure>;

/// Specification error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecErrorCode {
    /// Two fields with the same name
    DuplicateField,
    /// Min bound above max bound, or a duplicated enum tag
    ContradictoryBounds,
    /// Enum with no permitted tags
    EmptyEnum,
    /// Default on a required field, or of the wrong shape
    BadDefault,
}

impl SpecErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateField => "PERSONA_SPEC_DUPLICATE_FIELD",
            Self::ContradictoryBounds => "PERSONA_SPEC_CONTRADICTORY_BOUNDS",
            Self::EmptyEnum => "PERSONA_SPEC_EMPTY_ENUM",
            Self::BadDefault => "PERSONA_SPEC_BAD_DEFAULT",
        }
    }
}

impl fmt::Display for SpecErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A malformed constraint specification.
///
/// Never produced per-request; surfacing one means the schema tables
/// themselves are wrong and the service must not start.
#[derive(Debug)]
pub struct SpecError {
    code: SpecErrorCode,
    message: String,
}

impl SpecError {
    /// Duplicate field name in a schema
    pub fn duplicate_field(schema: &str, field: &str) -> Self {
        Self {
            code: SpecErrorCode::DuplicateField,
            message: format!("schema '{}' declares field '{}' twice", schema, field),
        }
    }

    /// Contradictory bounds on a field
    pub fn contradictory_bounds(schema: &str, field: &str, detail: impl Into<String>) -> Self {
        Self {
            code: SpecErrorCode::ContradictoryBounds,
            message: format!(
                "schema '{}', field '{}': {}",
                schema,
                field,
                detail.into()
            ),
        }
    }

    /// Enum field with an empty permitted set
    pub fn empty_enum(schema: &str, field: &str) -> Self {
        Self {
            code: SpecErrorCode::EmptyEnum,
            message: format!(
                "schema '{}', field '{}': enum permits no tags",
                schema, field
            ),
        }
    }

    /// Invalid default value declaration
    pub fn bad_default(schema: &str, field: &str, detail: impl Into<String>) -> Self {
        Self {
            code: SpecErrorCode::BadDefault,
            message: format!(
                "schema '{}', field '{}': {}",
                schema,
                field,
                detail.into()
            ),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SpecErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[FATAL] {}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for SpecError {}

/// Result type for schema construction
pub type SpecResult<T> = Result<T, SpecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_error_codes() {
        assert_eq!(
            SpecErrorCode::DuplicateField.code(),
            "PERSONA_SPEC_DUPLICATE_FIELD"
        );
        assert_eq!(
            SpecErrorCode::ContradictoryBounds.code(),
            "PERSONA_SPEC_CONTRADICTORY_BOUNDS"
        );
        assert_eq!(SpecErrorCode::EmptyEnum.code(), "PERSONA_SPEC_EMPTY_ENUM");
        assert_eq!(SpecErrorCode::BadDefault.code(), "PERSONA_SPEC_BAD_DEFAULT");
    }

    #[test]
    fn test_violation_display() {
        let violation = Violation::wrong_type("age", "integer", "string");
        let display = format!("{}", violation);
        assert!(display.contains("age"));
        assert!(display.contains("integer"));
        assert!(display.contains("string"));
    }

    #[test]
    fn test_not_in_set_names_permitted_tags() {
        let violation = Violation::not_in_set("hair_color", &["white", "brown"]);
        assert!(violation.reason.contains("white"));
        assert!(violation.reason.contains("brown"));
    }

    #[test]
    fn test_unbounded_max_phrasing() {
        let violation = Violation::string_length("password", 8, usize::MAX, 3);
        assert!(violation.reason.contains("at least 8"));

        let violation = Violation::int_range("person_id", 1, i64::MAX);
        assert!(violation.reason.contains("at least 1"));
    }

    #[test]
    fn test_failure_report_is_ordered_array() {
        let failure = ValidationFailure::new(
            "person",
            vec![Violation::missing("first_name"), Violation::missing("age")],
        );

        let report = failure.report();
        let entries = report.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["field"], "first_name");
        assert_eq!(entries[1]["field"], "age");
        assert!(entries[0]["reason"].as_str().unwrap().contains("missing"));
    }

    #[test]
    fn test_spec_error_display() {
        let err = SpecError::duplicate_field("person", "age");
        let display = format!("{}", err);
        assert!(display.contains("FATAL"));
        assert!(display.contains("PERSONA_SPEC_DUPLICATE_FIELD"));
        assert!(display.contains("person"));
    }
}
