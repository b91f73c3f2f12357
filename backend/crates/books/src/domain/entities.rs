//! Domain Entities
//!
//! Core business entities for the listing domain.

use chrono::{DateTime, Utc};
use kernel::id::{ListingId, UserId};

use crate::domain::value_objects::{BookDetails, ModerationStatus, Review};
use crate::error::{BookError, BookResult};

/// Public fields of the listing's owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

/// Listing entity - a book offered for exchange
#[derive(Debug, Clone)]
pub struct Listing {
    pub id: ListingId,
    pub owner: Owner,
    pub details: BookDetails,
    /// Public path of the stored image, e.g. `/uploads/<file>`
    pub image: Option<String>,
    pub status: ModerationStatus,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Create a new listing awaiting review
    pub fn new(owner: Owner, details: BookDetails, image: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ListingId::new(),
            owner,
            details,
            image,
            status: ModerationStatus::Pending,
            message: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner.user_id == user_id
    }

    /// Replace content fields; status and message are untouched
    ///
    /// Without a new image the current one is kept. Returns the image path
    /// that was replaced, if any.
    pub fn apply_content(&mut self, details: BookDetails, image: Option<String>) -> Option<String> {
        self.details = details;
        self.updated_at = Utc::now();

        match image {
            Some(new_image) => self.image.replace(new_image),
            None => None,
        }
    }

    /// Record a reviewer's verdict
    pub fn moderate(&mut self, review: Review) -> BookResult<()> {
        if self.status.is_final() {
            return Err(BookError::AlreadyReviewed);
        }

        self.status = review.status;
        self.message = Some(review.message);
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::BookCondition;

    fn owner() -> Owner {
        Owner {
            user_id: UserId::new(),
            name: "Alice".to_string(),
            email: "alice@x.io".to_string(),
        }
    }

    fn details(title: &str) -> BookDetails {
        BookDetails {
            title: title.to_string(),
            author: "Author".to_string(),
            condition: BookCondition::Good,
            description: None,
        }
    }

    fn review(status: ModerationStatus) -> Review {
        Review {
            status,
            message: "note".to_string(),
        }
    }

    #[test]
    fn test_new_listing_is_pending() {
        let listing = Listing::new(owner(), details("Dune"), None);
        assert_eq!(listing.status, ModerationStatus::Pending);
        assert_eq!(listing.message, None);
    }

    #[test]
    fn test_ownership() {
        let owner = owner();
        let listing = Listing::new(owner.clone(), details("Dune"), None);
        assert!(listing.is_owned_by(&owner.user_id));
        assert!(!listing.is_owned_by(&UserId::new()));
    }

    #[test]
    fn test_apply_content_keeps_image_when_absent() {
        let mut listing = Listing::new(owner(), details("Dune"), Some("/uploads/a.png".into()));

        assert_eq!(listing.apply_content(details("Dune II"), None), None);
        assert_eq!(listing.image.as_deref(), Some("/uploads/a.png"));
        assert_eq!(listing.details.title, "Dune II");

        let replaced = listing.apply_content(details("Dune III"), Some("/uploads/b.png".into()));
        assert_eq!(replaced.as_deref(), Some("/uploads/a.png"));
        assert_eq!(listing.image.as_deref(), Some("/uploads/b.png"));
    }

    #[test]
    fn test_apply_content_preserves_review() {
        let mut listing = Listing::new(owner(), details("Dune"), None);
        listing.moderate(review(ModerationStatus::Declined)).unwrap();

        listing.apply_content(details("Dune"), None);
        assert_eq!(listing.status, ModerationStatus::Declined);
        assert_eq!(listing.message.as_deref(), Some("note"));
    }

    #[test]
    fn test_review_is_final() {
        let mut listing = Listing::new(owner(), details("Dune"), None);
        listing.moderate(review(ModerationStatus::Accepted)).unwrap();

        assert!(matches!(
            listing.moderate(review(ModerationStatus::Declined)),
            Err(BookError::AlreadyReviewed)
        ));
        assert_eq!(listing.status, ModerationStatus::Accepted);
    }
}
