//! Migration to create the auditoria table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Auditoria::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Auditoria::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Auditoria::Accion)
                            .text()
                            .not_null()
                            .check(Expr::cust(
                                "accion IN ('INSERT', 'UPDATE', 'DELETE', 'SELECT')",
                            )),
                    )
                    .col(
                        ColumnDef::new(Auditoria::Entidad)
                            .text()
                            .not_null()
                            .check(Expr::cust(
                                "entidad IN ('usuarios', 'tarjetas', 'historial_uso', 'roles')",
                            )),
                    )
                    .col(ColumnDef::new(Auditoria::Descripcion).text().not_null())
                    .col(
                        ColumnDef::new(Auditoria::Fecha)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Auditoria::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Auditoria {
    Table,
    Id,
    Accion,
    Entidad,
    Descripcion,
    Fecha,
}
