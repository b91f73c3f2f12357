//! In-Memory Repository Implementation
//!
//! Used by tests and `STORAGE=memory` runs. Owner fields are captured when
//! the listing is created.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{ListingId, UserId};
use tokio::sync::RwLock;

use crate::domain::entities::Listing;
use crate::domain::repository::ListingRepository;
use crate::error::BookResult;

#[derive(Clone, Default)]
pub struct InMemoryBookRepository {
    listings: Arc<RwLock<HashMap<ListingId, Listing>>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(mut listings: Vec<Listing>) -> Vec<Listing> {
    listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    listings
}

impl ListingRepository for InMemoryBookRepository {
    async fn create(&self, listing: &Listing) -> BookResult<()> {
        self.listings
            .write()
            .await
            .insert(listing.id, listing.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ListingId) -> BookResult<Option<Listing>> {
        Ok(self.listings.read().await.get(id).cloned())
    }

    async fn list_all(&self) -> BookResult<Vec<Listing>> {
        let listings = self.listings.read().await.values().cloned().collect();
        Ok(newest_first(listings))
    }

    async fn list_by_owner(&self, owner: &UserId) -> BookResult<Vec<Listing>> {
        let listings = self
            .listings
            .read()
            .await
            .values()
            .filter(|l| l.is_owned_by(owner))
            .cloned()
            .collect();
        Ok(newest_first(listings))
    }

    async fn update_content(&self, listing: &Listing) -> BookResult<bool> {
        let mut listings = self.listings.write().await;
        match listings.get_mut(&listing.id) {
            Some(stored) if stored.is_owned_by(&listing.owner.user_id) => {
                stored.details = listing.details.clone();
                stored.image = listing.image.clone();
                stored.updated_at = listing.updated_at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn update_review(&self, listing: &Listing) -> BookResult<bool> {
        let mut listings = self.listings.write().await;
        match listings.get_mut(&listing.id) {
            Some(stored) if !stored.status.is_final() => {
                stored.status = listing.status;
                stored.message = listing.message.clone();
                stored.updated_at = listing.updated_at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_owned(&self, id: &ListingId, owner: &UserId) -> BookResult<Option<Listing>> {
        let mut listings = self.listings.write().await;
        if listings.get(id).is_some_and(|l| l.is_owned_by(owner)) {
            Ok(listings.remove(id))
        } else {
            Ok(None)
        }
    }
}
