use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{DomainError, DomainResult, Role, RoleRepositoryInterface};
use crate::infrastructure::database::entities::role;

pub struct RoleRepository {
    db: DatabaseConnection,
}

impl RoleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl RoleRepositoryInterface for RoleRepository {
    async fn list_roles(&self) -> DomainResult<Vec<Role>> {
        let models = role::Entity::find()
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models
            .into_iter()
            .map(|m| Role {
                id: m.id,
                nombre: m.nombre,
            })
            .collect())
    }

    async fn create_role(&self, nombre: &str) -> DomainResult<i32> {
        let model = role::ActiveModel {
            nombre: Set(nombre.to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(db_err)?;

        Ok(model.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ADMIN_ROLE_ID, DEFAULT_ROLE_ID};
    use crate::infrastructure::database::connect_in_memory;

    #[tokio::test]
    async fn built_in_roles_are_seeded() {
        let repo = RoleRepository::new(connect_in_memory().await.unwrap());

        let roles = repo.list_roles().await.unwrap();
        let ids: Vec<i32> = roles.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![ADMIN_ROLE_ID, DEFAULT_ROLE_ID]);
    }

    #[tokio::test]
    async fn create_role_enforces_name_constraints() {
        let repo = RoleRepository::new(connect_in_memory().await.unwrap());

        let id = repo.create_role("supervisor").await.unwrap();
        assert!(id > DEFAULT_ROLE_ID);
        assert!(repo.create_role("supervisor").await.is_err());
        assert!(repo.create_role("ab").await.is_err());
        assert!(repo.create_role("12345").await.is_err());
    }
}
