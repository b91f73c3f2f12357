//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use auth::CurrentUser;
use kernel::id::ListingId;
use platform::upload::ImageStore;

use crate::application::config::BooksConfig;
use crate::application::{
    CreateListingUseCase, DeleteListingUseCase, ModerateListingUseCase, QueryListingsUseCase,
    UpdateListingUseCase,
};
use crate::domain::entities::Owner;
use crate::domain::repository::ListingRepository;
use crate::error::{BookError, BookResult};
use crate::presentation::dto::{BookListResponse, BookResponse, MessageResponse, ReviewRequest};
use crate::presentation::form::ListingForm;

/// Shared state for book handlers
#[derive(Clone)]
pub struct BooksAppState<R>
where
    R: ListingRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub images: Arc<ImageStore>,
    pub config: Arc<BooksConfig>,
}

impl<R> BooksAppState<R>
where
    R: ListingRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: BooksConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            images: Arc::new(config.image_store()),
            config: Arc::new(config),
        }
    }
}

fn owner_of(current: &CurrentUser) -> Owner {
    let user = current.user();
    Owner {
        user_id: user.user_id,
        name: user.name.as_str().to_string(),
        email: user.email.as_str().to_string(),
    }
}

// ============================================================================
// Reads
// ============================================================================

/// GET /get-all-books, GET /
pub async fn list_all<R>(State(state): State<BooksAppState<R>>) -> BookResult<Json<BookListResponse>>
where
    R: ListingRepository + Clone + Send + Sync + 'static,
{
    let listings = QueryListingsUseCase::new(state.repo.clone()).all().await?;
    Ok(Json(listings.into()))
}

/// GET /my-books, GET /mine
pub async fn list_mine<R>(
    State(state): State<BooksAppState<R>>,
    current: CurrentUser,
) -> BookResult<Json<BookListResponse>>
where
    R: ListingRepository + Clone + Send + Sync + 'static,
{
    let listings = QueryListingsUseCase::new(state.repo.clone())
        .owned_by(&current.id())
        .await?;
    Ok(Json(listings.into()))
}

/// GET /get-books/{id}, GET /{id}, POST /admin/get-books/{id}
pub async fn get_book<R>(
    State(state): State<BooksAppState<R>>,
    Path(id): Path<String>,
) -> BookResult<Json<BookResponse>>
where
    R: ListingRepository + Clone + Send + Sync + 'static,
{
    let id = ListingId::parse_str(&id).ok_or(BookError::NotFound)?;
    let listing = QueryListingsUseCase::new(state.repo.clone()).by_id(&id).await?;

    Ok(Json(BookResponse {
        success: true,
        message: None,
        book: listing.into(),
    }))
}

// ============================================================================
// Owner mutations
// ============================================================================

/// POST /add-books, POST /
pub async fn create_book<R>(
    State(state): State<BooksAppState<R>>,
    current: CurrentUser,
    ListingForm(input): ListingForm,
) -> BookResult<(StatusCode, Json<BookResponse>)>
where
    R: ListingRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateListingUseCase::new(state.repo.clone(), state.images.clone());
    let listing = use_case.execute(owner_of(&current), input).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookResponse {
            success: true,
            message: Some("Book added successfully"),
            book: listing.into(),
        }),
    ))
}

/// PUT /edit-books/{id}, PUT /{id}
pub async fn update_book<R>(
    State(state): State<BooksAppState<R>>,
    current: CurrentUser,
    Path(id): Path<String>,
    ListingForm(input): ListingForm,
) -> BookResult<Json<BookResponse>>
where
    R: ListingRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateListingUseCase::new(state.repo.clone(), state.images.clone());
    let listing = use_case
        .execute(ListingId::parse_str(&id), &current.id(), input)
        .await?;

    Ok(Json(BookResponse {
        success: true,
        message: Some("Book updated successfully"),
        book: listing.into(),
    }))
}

/// DELETE /delete/{id}, DELETE /{id}
pub async fn delete_book<R>(
    State(state): State<BooksAppState<R>>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> BookResult<Json<MessageResponse>>
where
    R: ListingRepository + Clone + Send + Sync + 'static,
{
    DeleteListingUseCase::new(state.repo.clone(), state.images.clone())
        .execute(ListingId::parse_str(&id), &current.id())
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Book deleted successfully",
    }))
}

// ============================================================================
// Moderation
// ============================================================================

/// PUT /admin/status/{id}
pub async fn moderate_book<R>(
    State(state): State<BooksAppState<R>>,
    Path(id): Path<String>,
    body: Result<Json<ReviewRequest>, JsonRejection>,
) -> BookResult<Json<BookResponse>>
where
    R: ListingRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body.map_err(|_| BookError::InvalidBody)?;

    let listing = ModerateListingUseCase::new(state.repo.clone())
        .execute(ListingId::parse_str(&id), req.status, req.message)
        .await?;

    Ok(Json(BookResponse {
        success: true,
        message: Some("Book status updated successfully"),
        book: listing.into(),
    }))
}
