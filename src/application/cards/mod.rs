//! Cards module: registration, usage tracking and history

pub mod service;

pub use service::CardService;
