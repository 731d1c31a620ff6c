//! Usage history entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "historial_uso")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tarjeta_id: i32,
    pub fecha_uso: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tarjeta::Entity",
        from = "Column::TarjetaId",
        to = "super::tarjeta::Column::Id",
        on_delete = "Cascade"
    )]
    Tarjeta,
}

impl Related<super::tarjeta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tarjeta.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
