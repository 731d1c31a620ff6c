//! Audit trail types
//!
//! Mutating use-cases describe what they did as a [`NewAuditEntry`] and hand
//! it to an [`AuditSink`]. The sink is injected, so services never reach
//! for a global logger or connection.

use std::fmt;

use async_trait::async_trait;

use crate::domain::DomainResult;

/// Kind of action recorded in `auditoria.accion`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Insert,
    Update,
    Delete,
    Select,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Select => "SELECT",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table an audit entry refers to (`auditoria.entidad`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditEntity {
    Usuarios,
    Tarjetas,
    HistorialUso,
    Roles,
}

impl AuditEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usuarios => "usuarios",
            Self::Tarjetas => "tarjetas",
            Self::HistorialUso => "historial_uso",
            Self::Roles => "roles",
        }
    }
}

impl fmt::Display for AuditEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuditEntry {
    pub accion: AuditAction,
    pub entidad: AuditEntity,
    pub descripcion: String,
}

impl NewAuditEntry {
    pub fn new(accion: AuditAction, entidad: AuditEntity, descripcion: impl Into<String>) -> Self {
        Self {
            accion,
            entidad,
            descripcion: descripcion.into(),
        }
    }
}

/// Append-only destination for audit entries.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn append(&self, entry: NewAuditEntry) -> DomainResult<()>;
}
