//! Migration to create the historial_uso table

use sea_orm_migration::prelude::*;

use super::m20250210_000003_create_tarjetas::Tarjetas;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HistorialUso::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HistorialUso::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HistorialUso::TarjetaId).integer().not_null())
                    .col(
                        ColumnDef::new(HistorialUso::FechaUso)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_historial_uso_tarjeta")
                            .from(HistorialUso::Table, HistorialUso::TarjetaId)
                            .to(Tarjetas::Table, Tarjetas::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_historial_uso_tarjeta_id")
                    .table(HistorialUso::Table)
                    .col(HistorialUso::TarjetaId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HistorialUso::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum HistorialUso {
    Table,
    Id,
    TarjetaId,
    FechaUso,
}
