//! Role catalogue service

use std::sync::Arc;

use tracing::info;

use crate::application::audit::AuditLogger;
use crate::domain::{AuditAction, AuditEntity, DomainResult, Role, RoleRepositoryInterface};

pub struct RoleService<R: RoleRepositoryInterface> {
    repo: Arc<R>,
    audit: AuditLogger,
}

impl<R: RoleRepositoryInterface> RoleService<R> {
    pub fn new(repo: Arc<R>, audit: AuditLogger) -> Self {
        Self { repo, audit }
    }

    pub async fn list_roles(&self) -> DomainResult<Vec<Role>> {
        self.repo.list_roles().await
    }

    pub async fn create_role(&self, nombre: &str) -> DomainResult<i32> {
        let id = self.repo.create_role(nombre).await?;
        info!(role_id = id, nombre, "Role created");

        self.audit
            .record(
                AuditAction::Insert,
                AuditEntity::Roles,
                format!("Rol {} creado.", nombre),
            )
            .await;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::audit::testing::RecordingSink;
    use crate::infrastructure::database::connect_in_memory;
    use crate::infrastructure::database::repositories::RoleRepository;

    #[tokio::test]
    async fn create_role_is_listed_and_audited() {
        let db = connect_in_memory().await.unwrap();
        let sink = Arc::new(RecordingSink::default());
        let service = RoleService::new(
            Arc::new(RoleRepository::new(db)),
            AuditLogger::new(sink.clone()),
        );

        let id = service.create_role("supervisor").await.unwrap();

        let roles = service.list_roles().await.unwrap();
        assert!(roles.iter().any(|r| r.id == id && r.nombre == "supervisor"));
        assert_eq!(sink.entries()[0].entidad, AuditEntity::Roles);
    }

    #[tokio::test]
    async fn failed_insert_is_not_audited() {
        let db = connect_in_memory().await.unwrap();
        let sink = Arc::new(RecordingSink::default());
        let service = RoleService::new(
            Arc::new(RoleRepository::new(db)),
            AuditLogger::new(sink.clone()),
        );

        assert!(service.create_role("x").await.is_err());
        assert!(sink.entries().is_empty());
    }
}
