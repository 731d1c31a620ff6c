//! Best-effort audit logging
//!
//! Use-cases call [`AuditLogger::record`] after their primary write has
//! succeeded. A failing sink is logged and swallowed: the audit trail never
//! changes the outcome of the request that triggered it.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{AuditAction, AuditEntity, AuditSink, NewAuditEntry};

#[derive(Clone)]
pub struct AuditLogger {
    sink: Arc<dyn AuditSink>,
}

impl AuditLogger {
    pub fn new(sink: Arc<dyn AuditSink>) -> Self {
        Self { sink }
    }

    pub async fn record(
        &self,
        accion: AuditAction,
        entidad: AuditEntity,
        descripcion: impl Into<String>,
    ) {
        let entry = NewAuditEntry::new(accion, entidad, descripcion);
        debug!(accion = %accion, entidad = %entidad, descripcion = %entry.descripcion, "Audit entry");

        if let Err(e) = self.sink.append(entry).await {
            warn!(accion = %accion, entidad = %entidad, error = %e, "Failed to write audit entry");
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::{DomainError, DomainResult};

    /// Keeps entries in memory so tests can assert on them
    #[derive(Default)]
    pub struct RecordingSink {
        pub entries: Mutex<Vec<NewAuditEntry>>,
    }

    impl RecordingSink {
        pub fn entries(&self) -> Vec<NewAuditEntry> {
            self.entries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AuditSink for RecordingSink {
        async fn append(&self, entry: NewAuditEntry) -> DomainResult<()> {
            self.entries.lock().unwrap().push(entry);
            Ok(())
        }
    }

    pub struct FailingSink;

    #[async_trait]
    impl AuditSink for FailingSink {
        async fn append(&self, _entry: NewAuditEntry) -> DomainResult<()> {
            Err(DomainError::Storage("audit table unavailable".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FailingSink, RecordingSink};
    use super::*;

    #[tokio::test]
    async fn record_forwards_entry_to_sink() {
        let sink = Arc::new(RecordingSink::default());
        let logger = AuditLogger::new(sink.clone());

        logger
            .record(AuditAction::Update, AuditEntity::Usuarios, "Rol actualizado")
            .await;

        assert_eq!(
            sink.entries(),
            vec![NewAuditEntry::new(
                AuditAction::Update,
                AuditEntity::Usuarios,
                "Rol actualizado"
            )]
        );
    }

    #[tokio::test]
    async fn sink_failure_is_swallowed() {
        let logger = AuditLogger::new(Arc::new(FailingSink));
        logger
            .record(AuditAction::Insert, AuditEntity::Tarjetas, "ignored")
            .await;
    }
}
