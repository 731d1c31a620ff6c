//! Migration to create the tarjetas table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tarjetas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tarjetas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                            .check(Expr::cust("id > 0")),
                    )
                    .col(
                        ColumnDef::new(Tarjetas::Dmc)
                            .text()
                            .not_null()
                            .unique_key()
                            .check(Expr::cust(
                                "LENGTH(dmc) >= 6 AND LENGTH(dmc) < 30 AND dmc GLOB '*[A-Za-z0-9]*'",
                            )),
                    )
                    .col(
                        ColumnDef::new(Tarjetas::Familia)
                            .text()
                            .not_null()
                            .check(Expr::cust(
                                "LENGTH(familia) >= 3 AND LENGTH(familia) <= 50 AND familia GLOB '*[A-Za-z]*'",
                            )),
                    )
                    .col(
                        ColumnDef::new(Tarjetas::Linea)
                            .text()
                            .not_null()
                            .check(Expr::cust(
                                "LENGTH(linea) >= 3 AND LENGTH(linea) <= 50 AND linea GLOB '*[A-Za-z]*'",
                            )),
                    )
                    .col(
                        ColumnDef::new(Tarjetas::FechaCreacion)
                            .date()
                            .not_null()
                            .default(Expr::current_date()),
                    )
                    .col(
                        ColumnDef::new(Tarjetas::Contador)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::cust("contador >= 0")),
                    )
                    .to_owned(),
            )
            .await?;

        // Upsert lookups go by (dmc, familia)
        manager
            .create_index(
                Index::create()
                    .name("idx_tarjetas_dmc_familia")
                    .table(Tarjetas::Table)
                    .col(Tarjetas::Dmc)
                    .col(Tarjetas::Familia)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tarjetas::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Tarjetas {
    Table,
    Id,
    Dmc,
    Familia,
    Linea,
    FechaCreacion,
    Contador,
}
