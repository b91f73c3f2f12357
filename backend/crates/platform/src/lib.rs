//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Signed session tokens (JWT, HS256)
//! - Image upload storage on local disk
//! - Environment configuration helpers
//! - Secure randomness

pub mod config;
pub mod crypto;
pub mod password;
pub mod token;
pub mod upload;
