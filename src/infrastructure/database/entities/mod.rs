//! Database entities module

pub mod auditoria;
pub mod historial_uso;
pub mod role;
pub mod tarjeta;
pub mod usuario;

pub use auditoria::Entity as Auditoria;
pub use historial_uso::Entity as HistorialUso;
pub use role::Entity as Role;
pub use tarjeta::Entity as Tarjeta;
pub use usuario::Entity as Usuario;
