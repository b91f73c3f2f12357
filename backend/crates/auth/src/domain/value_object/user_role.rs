use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Account role, fixed at registration
///
/// Serialized (and stored) as the exact strings `"Student"` / `"Teacher"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum UserRole {
    /// Lists books and manages their own listings
    #[default]
    #[display("Student")]
    Student,
    /// Moderates listings
    #[display("Teacher")]
    Teacher,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Teacher => "Teacher",
        }
    }

    /// Exact, case-sensitive match
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Student" => Some(UserRole::Student),
            "Teacher" => Some(UserRole::Teacher),
            _ => None,
        }
    }

    /// Role requested at signup; anything unrecognized becomes `Student`
    pub fn from_requested(requested: Option<&str>) -> Self {
        requested.and_then(Self::from_code).unwrap_or_default()
    }

    #[inline]
    pub const fn is_teacher(&self) -> bool {
        matches!(self, UserRole::Teacher)
    }
}
