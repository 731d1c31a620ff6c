//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories.

pub mod audit_repository;
pub mod card_repository;
pub mod role_repository;
pub mod user_repository;

pub use audit_repository::AuditRepository;
pub use card_repository::CardRepository;
pub use role_repository::RoleRepository;
pub use user_repository::UserRepository;
