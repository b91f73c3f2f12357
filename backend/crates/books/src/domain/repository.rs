//! Repository Traits
//!
//! Interfaces for listing persistence. Implementations live in `infra`.

use kernel::id::{ListingId, UserId};

use crate::domain::entities::Listing;
use crate::error::BookResult;

/// Listing repository trait
///
/// Reads always return the owner's current public fields.
#[trait_variant::make(ListingRepository: Send)]
pub trait LocalListingRepository {
    /// Insert a new listing
    async fn create(&self, listing: &Listing) -> BookResult<()>;

    /// Find a listing by ID
    async fn find_by_id(&self, id: &ListingId) -> BookResult<Option<Listing>>;

    /// Every listing, newest first
    async fn list_all(&self) -> BookResult<Vec<Listing>>;

    /// Listings of one owner, newest first
    async fn list_by_owner(&self, owner: &UserId) -> BookResult<Vec<Listing>>;

    /// Write content fields (title, author, condition, description, image)
    ///
    /// Matches only when `listing.owner` still owns the row; returns whether
    /// a row was updated.
    async fn update_content(&self, listing: &Listing) -> BookResult<bool>;

    /// Write status and message
    ///
    /// Matches only while the stored status is still pending; returns whether
    /// a row was updated.
    async fn update_review(&self, listing: &Listing) -> BookResult<bool>;

    /// Delete a listing if `owner` owns it, returning what was removed
    async fn delete_owned(&self, id: &ListingId, owner: &UserId) -> BookResult<Option<Listing>>;
}
