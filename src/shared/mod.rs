//! Cross-cutting runtime helpers

pub mod shutdown;

pub use shutdown::{ShutdownCoordinator, ShutdownSignal};
