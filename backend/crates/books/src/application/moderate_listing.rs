//! Moderate Listing Use Case
//!
//! Reviewer sets the verdict and message. The Teacher role is enforced by
//! the route guard, not here.

use std::sync::Arc;

use kernel::id::ListingId;

use crate::domain::entities::Listing;
use crate::domain::repository::ListingRepository;
use crate::domain::value_objects::Review;
use crate::error::{BookError, BookResult};

pub struct ModerateListingUseCase<R>
where
    R: ListingRepository,
{
    repo: Arc<R>,
}

impl<R> ModerateListingUseCase<R>
where
    R: ListingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: Option<ListingId>,
        status: Option<String>,
        message: Option<String>,
    ) -> BookResult<Listing> {
        let review = Review::new(status, message)?;

        let id = id.ok_or(BookError::NotFound)?;
        let mut listing = self.repo.find_by_id(&id).await?.ok_or(BookError::NotFound)?;

        listing.moderate(review)?;

        // Another reviewer may have got there first
        if !self.repo.update_review(&listing).await? {
            return Err(BookError::AlreadyReviewed);
        }

        tracing::info!(
            listing_id = %listing.id,
            status = %listing.status,
            "Listing moderated"
        );

        Ok(listing)
    }
}
