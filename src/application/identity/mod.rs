//! Identity module: users, roles & authentication
//!
//! `UserService` covers login, registration and user administration;
//! `RoleService` covers the role catalogue.

pub mod roles;
pub mod service;

pub use roles::RoleService;
pub use service::{AuthResult, UserService};
