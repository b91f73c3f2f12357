//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Listing;

/// JSON body for create/update when no file is sent
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListingBody {
    pub title: Option<String>,
    pub author: Option<String>,
    pub condition: Option<String>,
    pub description: Option<String>,
}

/// Request for PUT /admin/status/{id}
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReviewRequest {
    pub status: Option<String>,
    pub message: Option<String>,
}

/// Listing as rendered to clients
#[derive(Debug, Clone, Serialize)]
pub struct BookView {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub author: String,
    pub condition: &'static str,
    pub image: Option<String>,
    pub description: Option<String>,
    pub status: &'static str,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_name: String,
    pub owner_email: String,
}

impl From<Listing> for BookView {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id.to_string(),
            user_id: listing.owner.user_id.to_string(),
            title: listing.details.title,
            author: listing.details.author,
            condition: listing.details.condition.as_str(),
            image: listing.image,
            description: listing.details.description,
            status: listing.status.as_str(),
            message: listing.message,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
            owner_name: listing.owner.name,
            owner_email: listing.owner.email,
        }
    }
}

/// Response for list endpoints
#[derive(Debug, Clone, Serialize)]
pub struct BookListResponse {
    pub success: bool,
    pub count: usize,
    pub books: Vec<BookView>,
}

impl From<Vec<Listing>> for BookListResponse {
    fn from(listings: Vec<Listing>) -> Self {
        let books: Vec<BookView> = listings.into_iter().map(BookView::from).collect();
        Self {
            success: true,
            count: books.len(),
            books,
        }
    }
}

/// Response carrying one listing, with an optional message
#[derive(Debug, Clone, Serialize)]
pub struct BookResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub book: BookView,
}

/// Response with no payload beyond the message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}
