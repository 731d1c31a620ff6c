//! Migration to create the usuarios table

use sea_orm_migration::prelude::*;

use super::m20250210_000001_create_roles::Roles;
use crate::domain::DEFAULT_ROLE_ID;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuarios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Usuarios::Nombre)
                            .text()
                            .not_null()
                            .unique_key()
                            .check(Expr::cust(
                                "LENGTH(nombre) >= 3 AND LENGTH(nombre) <= 50 AND nombre GLOB '*[A-Za-z]*'",
                            )),
                    )
                    .col(ColumnDef::new(Usuarios::Password).text().not_null())
                    .col(
                        ColumnDef::new(Usuarios::FechaCreacion)
                            .date()
                            .not_null()
                            .default(Expr::current_date()),
                    )
                    .col(
                        ColumnDef::new(Usuarios::RoleId)
                            .integer()
                            .not_null()
                            .default(DEFAULT_ROLE_ID),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_usuarios_role")
                            .from(Usuarios::Table, Usuarios::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::SetDefault),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Usuarios {
    Table,
    Id,
    Nombre,
    Password,
    FechaCreacion,
    RoleId,
}
