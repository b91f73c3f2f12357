//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod config;
pub mod create_listing;
pub mod delete_listing;
mod images;
pub mod moderate_listing;
pub mod query_listings;
pub mod update_listing;

pub use config::BooksConfig;
pub use create_listing::{CreateListingUseCase, ListingInput};
pub use delete_listing::DeleteListingUseCase;
pub use moderate_listing::ModerateListingUseCase;
pub use query_listings::QueryListingsUseCase;
pub use update_listing::UpdateListingUseCase;
