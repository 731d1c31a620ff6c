//! Dashboard module: family catalogue and usage series

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
