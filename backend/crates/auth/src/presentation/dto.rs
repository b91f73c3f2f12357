//! API DTOs (Data Transfer Objects)

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Requests
// ============================================================================

/// Sign up request (presence is checked by the use case)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignUpRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// `"Student"` or `"Teacher"`; anything else registers a Student
    #[serde(deserialize_with = "text_or_none")]
    pub role: Option<String>,
}

/// Strings pass through; numbers, arrays, objects and null become `None`
fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Field::deserialize(deserializer)? {
        Field::Text(text) => Some(text),
        Field::Other(_) => None,
    })
}

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Public view of a user (never includes the password hash)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            role: user.role.code().to_string(),
        }
    }
}

/// Signup / login response
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: &'static str,
    pub token: String,
    pub user: UserResponse,
}

/// Bare liveness / gate-check response
#[derive(Debug, Clone, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_role_is_lenient() {
        let parse = |json: &str| serde_json::from_str::<SignUpRequest>(json).unwrap().role;

        assert_eq!(parse(r#"{"role": "Teacher"}"#).as_deref(), Some("Teacher"));
        assert_eq!(parse(r#"{"role": 5}"#), None);
        assert_eq!(parse(r#"{"role": ["Teacher"]}"#), None);
        assert_eq!(parse(r#"{"role": {"name": "Teacher"}}"#), None);
        assert_eq!(parse(r#"{"role": null}"#), None);
        assert_eq!(parse(r#"{"name": "Alice"}"#), None);
    }

    #[test]
    fn test_signup_text_fields_stay_strict() {
        assert!(serde_json::from_str::<SignUpRequest>(r#"{"name": 5}"#).is_err());
    }
}
