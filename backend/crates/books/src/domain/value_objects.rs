//! Domain Value Objects
//!
//! Immutable value types for the listing domain.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::{BookError, BookResult};

/// Longest accepted title / author (in characters)
pub const MAX_TEXT_LENGTH: usize = 255;

/// Physical condition of a listed book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum BookCondition {
    #[serde(rename = "Like New")]
    #[display("Like New")]
    LikeNew,
    #[display("Good")]
    Good,
    #[display("Fair")]
    Fair,
}

impl BookCondition {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BookCondition::LikeNew => "Like New",
            BookCondition::Good => "Good",
            BookCondition::Fair => "Fair",
        }
    }

    /// Exact, case-sensitive match
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Like New" => Some(BookCondition::LikeNew),
            "Good" => Some(BookCondition::Good),
            "Fair" => Some(BookCondition::Fair),
            _ => None,
        }
    }
}

/// Moderation state of a listing
///
/// `Pending -> Accepted | Declined`; both outcomes are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    #[default]
    #[display("pending")]
    Pending,
    #[display("accepted")]
    Accepted,
    #[display("declined")]
    Declined,
}

impl ModerationStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ModerationStatus::Pending => "pending",
            ModerationStatus::Accepted => "accepted",
            ModerationStatus::Declined => "declined",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(ModerationStatus::Pending),
            "accepted" => Some(ModerationStatus::Accepted),
            "declined" => Some(ModerationStatus::Declined),
            _ => None,
        }
    }

    pub const fn is_final(&self) -> bool {
        !matches!(self, ModerationStatus::Pending)
    }
}

/// Validated content fields of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetails {
    pub title: String,
    pub author: String,
    pub condition: BookCondition,
    pub description: Option<String>,
}

impl BookDetails {
    /// Validate raw form input
    ///
    /// Text is trimmed; a blank description becomes `None`.
    pub fn new(
        title: Option<String>,
        author: Option<String>,
        condition: Option<String>,
        description: Option<String>,
    ) -> BookResult<Self> {
        let (Some(title), Some(author), Some(condition)) =
            (non_blank(title), non_blank(author), non_blank(condition))
        else {
            return Err(BookError::MissingFields);
        };

        let condition = BookCondition::parse(&condition).ok_or(BookError::InvalidCondition)?;

        Ok(Self {
            title: bounded("Title", title)?,
            author: bounded("Author", author)?,
            condition,
            description: non_blank(description),
        })
    }
}

/// A reviewer's verdict with its explanation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub status: ModerationStatus,
    pub message: String,
}

impl Review {
    pub fn new(status: Option<String>, message: Option<String>) -> BookResult<Self> {
        let (Some(status), Some(message)) = (non_blank(status), non_blank(message)) else {
            return Err(BookError::ReviewFieldsRequired);
        };

        let status = match ModerationStatus::from_code(&status) {
            Some(s) if s.is_final() => s,
            _ => return Err(BookError::InvalidStatus),
        };

        Ok(Self { status, message })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn bounded(field: &'static str, value: String) -> BookResult<String> {
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(BookError::TextTooLong {
            field,
            max: MAX_TEXT_LENGTH,
        });
    }
    Ok(value)
}
