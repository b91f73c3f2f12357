//! Infrastructure Layer

pub mod memory;
pub mod postgres;

pub use memory::InMemoryBookRepository;
pub use postgres::PgBookRepository;
