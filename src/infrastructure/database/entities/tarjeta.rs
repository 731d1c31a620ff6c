//! Card entity for database

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Card model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tarjetas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub dmc: String,
    pub familia: String,
    pub linea: String,
    pub fecha_creacion: NaiveDate,
    /// Exposed over the API as `veces_usada`
    pub contador: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::historial_uso::Entity")]
    HistorialUso,
}

impl Related<super::historial_uso::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HistorialUso.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
