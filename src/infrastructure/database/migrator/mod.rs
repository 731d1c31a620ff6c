//! Database migrations module
//!
//! Every statement is `IF NOT EXISTS` / `ON CONFLICT DO NOTHING`, so running
//! the migrator at each startup is idempotent.

pub use sea_orm_migration::prelude::*;

mod m20250210_000001_create_roles;
mod m20250210_000002_create_usuarios;
mod m20250210_000003_create_tarjetas;
mod m20250210_000004_create_historial_uso;
mod m20250210_000005_create_auditoria;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250210_000001_create_roles::Migration),
            Box::new(m20250210_000002_create_usuarios::Migration),
            Box::new(m20250210_000003_create_tarjetas::Migration),
            Box::new(m20250210_000004_create_historial_uso::Migration),
            Box::new(m20250210_000005_create_auditoria::Migration),
        ]
    }
}
