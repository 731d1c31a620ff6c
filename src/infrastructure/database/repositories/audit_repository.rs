use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::domain::{AuditSink, DomainError, DomainResult, NewAuditEntry};
use crate::infrastructure::database::entities::auditoria;

/// Audit sink writing to the `auditoria` table
pub struct AuditRepository {
    db: DatabaseConnection,
}

impl AuditRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuditSink for AuditRepository {
    async fn append(&self, entry: NewAuditEntry) -> DomainResult<()> {
        auditoria::ActiveModel {
            accion: Set(entry.accion.into()),
            entidad: Set(entry.entidad.into()),
            descripcion: Set(entry.descripcion),
            fecha: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Storage(e.to_string()))?;

        Ok(())
    }
}
