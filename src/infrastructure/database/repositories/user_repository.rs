use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{CreateUserDto, DomainError, DomainResult, User, UserRepositoryInterface};
use crate::infrastructure::database::entities::usuario;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn user_model_to_domain(model: usuario::Model) -> User {
    User {
        id: model.id,
        nombre: model.nombre,
        password_hash: model.password,
        fecha_creacion: model.fecha_creacion,
        role_id: model.role_id,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<i32> {
        let new_user = usuario::ActiveModel {
            nombre: Set(dto.nombre),
            password: Set(dto.password_hash),
            fecha_creacion: Set(Utc::now().date_naive()),
            role_id: Set(dto.role_id),
            ..Default::default()
        };

        // Duplicate names fail on the UNIQUE constraint and stay a storage error
        let model = new_user.insert(&self.db).await.map_err(db_err)?;
        Ok(model.id)
    }

    async fn list_users(&self) -> DomainResult<Vec<User>> {
        let models = usuario::Entity::find()
            .order_by_asc(usuario::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn get_user_by_nombre(&self, nombre: &str) -> DomainResult<Option<User>> {
        let model = usuario::Entity::find()
            .filter(usuario::Column::Nombre.eq(nombre))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn get_user_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = usuario::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn count_users(&self) -> DomainResult<u64> {
        usuario::Entity::find().count(&self.db).await.map_err(db_err)
    }

    async fn update_user_role(&self, id: i32, role_id: i32) -> DomainResult<u64> {
        let result = usuario::Entity::update_many()
            .col_expr(usuario::Column::RoleId, Expr::value(role_id))
            .filter(usuario::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_ROLE_ID;
    use crate::infrastructure::database::connect_in_memory;
    use crate::infrastructure::database::entities::role;

    fn dto(nombre: &str) -> CreateUserDto {
        CreateUserDto {
            nombre: nombre.to_string(),
            password_hash: "$2b$10$notarealhash".to_string(),
            role_id: DEFAULT_ROLE_ID,
        }
    }

    #[tokio::test]
    async fn create_and_lookup_user() {
        let repo = UserRepository::new(connect_in_memory().await.unwrap());

        let id = repo.create_user(dto("operario")).await.unwrap();
        let user = repo.get_user_by_nombre("operario").await.unwrap().unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.role_id, DEFAULT_ROLE_ID);
        assert_eq!(repo.get_user_by_id(id).await.unwrap(), Some(user));
        assert_eq!(repo.count_users().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn duplicate_name_is_a_storage_error() {
        let repo = UserRepository::new(connect_in_memory().await.unwrap());

        repo.create_user(dto("operario")).await.unwrap();
        assert!(matches!(
            repo.create_user(dto("operario")).await,
            Err(DomainError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn unknown_role_violates_foreign_key() {
        let repo = UserRepository::new(connect_in_memory().await.unwrap());

        let mut bad = dto("operario");
        bad.role_id = 99;
        assert!(repo.create_user(bad).await.is_err());
    }

    #[tokio::test]
    async fn deleting_a_role_falls_back_to_default_role() {
        let db = connect_in_memory().await.unwrap();
        let repo = UserRepository::new(db.clone());

        let supervisor = role::ActiveModel {
            nombre: Set("supervisor".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let id = repo.create_user(dto("operario")).await.unwrap();
        assert_eq!(repo.update_user_role(id, supervisor.id).await.unwrap(), 1);

        role::Entity::delete_by_id(supervisor.id).exec(&db).await.unwrap();

        let user = repo.get_user_by_id(id).await.unwrap().unwrap();
        assert_eq!(user.role_id, DEFAULT_ROLE_ID);
    }

    #[tokio::test]
    async fn update_role_of_missing_user_touches_nothing() {
        let repo = UserRepository::new(connect_in_memory().await.unwrap());
        assert_eq!(repo.update_user_role(99, 1).await.unwrap(), 0);
    }
}
