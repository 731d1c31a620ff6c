//! Application layer: use-cases orchestrating domain ports

pub mod audit;
pub mod cards;
pub mod dashboard;
pub mod identity;

pub use audit::AuditLogger;
pub use cards::CardService;
pub use identity::{AuthResult, RoleService, UserService};
