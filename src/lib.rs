//! # Tarjetas
//!
//! REST backend for an inventory of cards ("tarjetas") identified by a
//! DMC code and grouped by product family and line.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core entities, errors and repository traits
//! - **application**: Use cases (cards, identity, dashboard, audit)
//! - **infrastructure**: SQLite store via SeaORM, password hashing, JWT
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::{create_api_router, AppState};
