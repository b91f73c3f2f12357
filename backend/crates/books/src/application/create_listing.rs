//! Create Listing Use Case

use std::sync::Arc;

use platform::upload::{ImageStore, ImageUpload};

use crate::application::images;
use crate::domain::entities::{Listing, Owner};
use crate::domain::repository::ListingRepository;
use crate::domain::value_objects::BookDetails;
use crate::error::BookResult;

/// Content fields as submitted; shared by create and update
#[derive(Debug, Default)]
pub struct ListingInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub condition: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImageUpload>,
}

impl ListingInput {
    /// Validate the text fields, leaving the image for later
    pub(crate) fn into_parts(self) -> BookResult<(BookDetails, Option<ImageUpload>)> {
        let details = BookDetails::new(self.title, self.author, self.condition, self.description)?;
        Ok((details, self.image))
    }
}

pub struct CreateListingUseCase<R>
where
    R: ListingRepository,
{
    repo: Arc<R>,
    images: Arc<ImageStore>,
}

impl<R> CreateListingUseCase<R>
where
    R: ListingRepository,
{
    pub fn new(repo: Arc<R>, images: Arc<ImageStore>) -> Self {
        Self { repo, images }
    }

    /// Status and message are always server-assigned (`pending`, none)
    pub async fn execute(&self, owner: Owner, input: ListingInput) -> BookResult<Listing> {
        let (details, upload) = input.into_parts()?;

        let image = images::store(&self.images, upload).await?;
        let listing = Listing::new(owner, details, image);

        if let Err(e) = self.repo.create(&listing).await {
            images::discard(&self.images, listing.image.as_deref()).await;
            return Err(e);
        }

        tracing::info!(
            listing_id = %listing.id,
            owner_id = %listing.owner.user_id,
            "Listing created"
        );

        Ok(listing)
    }
}
