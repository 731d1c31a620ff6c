//! Domain layer
//!
//! Core entities of the card tracker (cards, usage events, users, roles,
//! audit entries) and the repository ports the infrastructure implements.

pub mod audit;
pub mod card;
pub mod error;
pub mod role;
pub mod user;

pub use audit::{AuditAction, AuditEntity, AuditSink, NewAuditEntry};
pub use card::{Card, CardRegistration, CardRepositoryInterface, RegisterCardDto, UsageEvent};
pub use error::{DomainError, DomainResult};
pub use role::{Role, RoleRepositoryInterface, ADMIN_ROLE_ID, DEFAULT_ROLE_ID};
pub use user::{CreateUserDto, User, UserRepositoryInterface};
