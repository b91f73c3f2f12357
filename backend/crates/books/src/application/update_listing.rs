//! Update Listing Use Case
//!
//! Owner-only content edit. A listing that does not exist and one owned by
//! someone else produce the same error.

use std::sync::Arc;

use kernel::id::{ListingId, UserId};
use platform::upload::ImageStore;

use crate::application::create_listing::ListingInput;
use crate::application::images;
use crate::domain::entities::Listing;
use crate::domain::repository::ListingRepository;
use crate::error::{BookError, BookResult};

pub struct UpdateListingUseCase<R>
where
    R: ListingRepository,
{
    repo: Arc<R>,
    images: Arc<ImageStore>,
}

impl<R> UpdateListingUseCase<R>
where
    R: ListingRepository,
{
    pub fn new(repo: Arc<R>, images: Arc<ImageStore>) -> Self {
        Self { repo, images }
    }

    pub async fn execute(
        &self,
        id: Option<ListingId>,
        caller: &UserId,
        input: ListingInput,
    ) -> BookResult<Listing> {
        let (details, upload) = input.into_parts()?;

        let Some(id) = id else {
            return Err(BookError::NotOwner);
        };
        let mut listing = match self.repo.find_by_id(&id).await? {
            Some(listing) if listing.is_owned_by(caller) => listing,
            _ => return Err(BookError::NotOwner),
        };

        let new_image = images::store(&self.images, upload).await?;
        let replaced = listing.apply_content(details, new_image.clone());

        let written = match self.repo.update_content(&listing).await {
            Ok(written) => written,
            Err(e) => {
                images::discard(&self.images, new_image.as_deref()).await;
                return Err(e);
            }
        };
        if !written {
            // Deleted between read and write
            images::discard(&self.images, new_image.as_deref()).await;
            return Err(BookError::NotOwner);
        }

        images::discard(&self.images, replaced.as_deref()).await;

        tracing::info!(listing_id = %listing.id, "Listing updated");

        Ok(listing)
    }
}
