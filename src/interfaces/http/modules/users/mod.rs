//! Users module: user administration and role assignment

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
