//! Cards module: registration, usage and history

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
