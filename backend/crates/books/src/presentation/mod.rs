//! Presentation Layer
//!
//! HTTP handlers, DTOs and the listing form extractor.

pub mod dto;
pub mod form;
pub mod handlers;
pub mod router;

pub use handlers::BooksAppState;
pub use router::books_router;
