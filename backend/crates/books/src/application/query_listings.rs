//! Listing Queries
//!
//! Read side: all listings, a user's own listings, one listing by id.

use std::sync::Arc;

use kernel::id::{ListingId, UserId};

use crate::domain::entities::Listing;
use crate::domain::repository::ListingRepository;
use crate::error::{BookError, BookResult};

pub struct QueryListingsUseCase<R>
where
    R: ListingRepository,
{
    repo: Arc<R>,
}

impl<R> QueryListingsUseCase<R>
where
    R: ListingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every listing system-wide, newest first
    pub async fn all(&self) -> BookResult<Vec<Listing>> {
        self.repo.list_all().await
    }

    /// Only `owner`'s listings, newest first
    pub async fn owned_by(&self, owner: &UserId) -> BookResult<Vec<Listing>> {
        self.repo.list_by_owner(owner).await
    }

    pub async fn by_id(&self, id: &ListingId) -> BookResult<Listing> {
        self.repo.find_by_id(id).await?.ok_or(BookError::NotFound)
    }
}
