//! Infrastructure layer - external concerns

pub mod crypto;
pub mod database;

pub use database::{connect_in_memory, ensure_schema, init_database, DatabaseConfig};
