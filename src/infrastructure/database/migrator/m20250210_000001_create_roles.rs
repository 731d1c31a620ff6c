//! Migration to create the roles table and seed the built-in roles

use sea_orm_migration::prelude::*;

use crate::domain::{ADMIN_ROLE_ID, DEFAULT_ROLE_ID};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Roles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                            .check(Expr::cust("id > 0")),
                    )
                    .col(
                        ColumnDef::new(Roles::Nombre)
                            .text()
                            .not_null()
                            .unique_key()
                            .check(Expr::cust(
                                "LENGTH(nombre) >= 3 AND LENGTH(nombre) <= 50 AND nombre GLOB '*[A-Za-z]*'",
                            )),
                    )
                    .to_owned(),
            )
            .await?;

        // `usuarios.role_id` defaults to DEFAULT_ROLE_ID, so it must exist
        let seed = Query::insert()
            .into_table(Roles::Table)
            .columns([Roles::Id, Roles::Nombre])
            .values_panic([ADMIN_ROLE_ID.into(), "admin".into()])
            .values_panic([DEFAULT_ROLE_ID.into(), "operador".into()])
            .on_conflict(OnConflict::column(Roles::Id).do_nothing().to_owned())
            .to_owned();

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Roles {
    Table,
    Id,
    Nombre,
}
