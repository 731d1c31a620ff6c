//! Audit log entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::{AuditAction, AuditEntity};

/// Audited action, mirrors the CHECK constraint on `auditoria.accion`
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum Accion {
    #[sea_orm(string_value = "INSERT")]
    Insert,
    #[sea_orm(string_value = "UPDATE")]
    Update,
    #[sea_orm(string_value = "DELETE")]
    Delete,
    #[sea_orm(string_value = "SELECT")]
    Select,
}

/// Audited table, mirrors the CHECK constraint on `auditoria.entidad`
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Entidad {
    #[sea_orm(string_value = "usuarios")]
    Usuarios,
    #[sea_orm(string_value = "tarjetas")]
    Tarjetas,
    #[sea_orm(string_value = "historial_uso")]
    HistorialUso,
    #[sea_orm(string_value = "roles")]
    Roles,
}

impl From<AuditAction> for Accion {
    fn from(action: AuditAction) -> Self {
        match action {
            AuditAction::Insert => Self::Insert,
            AuditAction::Update => Self::Update,
            AuditAction::Delete => Self::Delete,
            AuditAction::Select => Self::Select,
        }
    }
}

impl From<AuditEntity> for Entidad {
    fn from(entity: AuditEntity) -> Self {
        match entity {
            AuditEntity::Usuarios => Self::Usuarios,
            AuditEntity::Tarjetas => Self::Tarjetas,
            AuditEntity::HistorialUso => Self::HistorialUso,
            AuditEntity::Roles => Self::Roles,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "auditoria")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub accion: Accion,
    pub entidad: Entidad,
    pub descripcion: String,
    pub fecha: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
