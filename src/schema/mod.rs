//! Schema Validator subsystem.
//!
//! Declarative, data-driven validation of structured records against
//! per-field constraint tables.
//!
//! # Design Principles
//!
//! - One generic validation routine consumes ordered field-spec tables
//! - The complete violation set is reported in one pass (no short-circuit)
//! - Bad input is a recoverable `ValidationFailure`, never a panic
//! - A bad constraint table is a `SpecError` and aborts startup
//! - Validation is pure and deterministic

mod errors;
mod types;
mod validator;

pub use errors::{
    SpecError, SpecErrorCode, SpecResult, ValidationFailure, ValidationResult, Violation,
};
pub use types::{FieldSpec, FieldType, FieldValue, RecordSchema};
pub use validator::NormalizedRecord;
