//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Listing, Owner)
//! - Domain value objects (BookCondition, ModerationStatus, BookDetails, Review)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
