//! Books (Listing) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Listing entity, value objects, repository trait
//! - `application/` - Use cases and image bookkeeping
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, form extractor, router
//!
//! ## Lifecycle
//! Students create listings, which always start `pending`. Owners may edit
//! content or delete their own listings at any time. Teachers move a pending
//! listing to `accepted` or `declined` exactly once, with a message.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::BooksConfig;
pub use domain::value_objects::{BookCondition, ModerationStatus};
pub use error::{BookError, BookResult};
pub use infra::memory::InMemoryBookRepository;
pub use infra::postgres::PgBookRepository;
pub use presentation::handlers::BooksAppState;
pub use presentation::router::books_router;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
