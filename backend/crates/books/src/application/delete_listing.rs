//! Delete Listing Use Case

use std::sync::Arc;

use kernel::id::{ListingId, UserId};
use platform::upload::ImageStore;

use crate::application::images;
use crate::domain::repository::ListingRepository;
use crate::error::{BookError, BookResult};

pub struct DeleteListingUseCase<R>
where
    R: ListingRepository,
{
    repo: Arc<R>,
    images: Arc<ImageStore>,
}

impl<R> DeleteListingUseCase<R>
where
    R: ListingRepository,
{
    pub fn new(repo: Arc<R>, images: Arc<ImageStore>) -> Self {
        Self { repo, images }
    }

    /// Absent and foreign listings both fail with `NotOwner`
    pub async fn execute(&self, id: Option<ListingId>, caller: &UserId) -> BookResult<()> {
        let id = id.ok_or(BookError::NotOwner)?;

        let removed = self
            .repo
            .delete_owned(&id, caller)
            .await?
            .ok_or(BookError::NotOwner)?;

        images::discard(&self.images, removed.image.as_deref()).await;

        tracing::info!(listing_id = %removed.id, "Listing deleted");

        Ok(())
    }
}
