//! Card aggregate
//!
//! A card (`tarjeta`) is identified by its dmc code and carries a usage
//! counter. Every increment of that counter is mirrored by one usage event.

pub mod model;
pub mod repository;

mod dto_register;

pub use model::{Card, CardRegistration, UsageEvent};

pub use dto_register::RegisterCardDto;

pub use repository::CardRepositoryInterface;
