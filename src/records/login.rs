//! Mock login model and constraint table.
//!
//! No credential checking happens anywhere: any well-formed username and
//! password are accepted and a fixed success message is returned.

use serde::Serialize;

use crate::schema::{FieldSpec, FieldType, RecordSchema, SpecResult};

/// Fixed success message returned on every login.
pub const LOGIN_MESSAGE: &str = "Login Successfully!";

/// Response body for the mock login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResult {
    pub username: String,
    pub message: String,
}

impl LoginResult {
    /// Builds the fixed success result for a username
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            message: LOGIN_MESSAGE.to_string(),
        }
    }
}

/// Form schema for `POST /login`.
///
/// The password is validated for presence only and never echoed.
pub fn login_schema() -> SpecResult<RecordSchema> {
    RecordSchema::build(
        "login",
        vec![
            FieldSpec::required(
                "username",
                FieldType::String {
                    min_len: 1,
                    max_len: 20,
                },
            ),
            FieldSpec::required(
                "password",
                FieldType::String {
                    min_len: 1,
                    max_len: usize::MAX,
                },
            )
            .sensitive(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_schema_builds() {
        login_schema().unwrap();
    }

    #[test]
    fn test_any_credentials_accepted() {
        let schema = login_schema().unwrap();
        let record = schema
            .validate(&json!({"username": "devferx", "password": "x"}))
            .unwrap();
        assert_eq!(record.get("username").unwrap().as_str(), Some("devferx"));
    }

    #[test]
    fn test_username_length_capped() {
        let schema = login_schema().unwrap();
        let long = "x".repeat(21);
        let failure = schema
            .validate(&json!({"username": long, "password": "x"}))
            .unwrap_err();
        assert_eq!(failure.violations()[0].field, "username");
    }

    #[test]
    fn test_result_carries_fixed_message() {
        let result = LoginResult::new("devferx");
        assert_eq!(result.message, LOGIN_MESSAGE);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["username"], "devferx");
        assert_eq!(value["message"], "Login Successfully!");
    }
}
