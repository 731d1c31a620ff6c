//! User management service: application-layer orchestration
//!
//! All user-related business logic lives here.
//! HTTP handlers should be thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::audit::AuditLogger;
use crate::domain::{
    AuditAction, AuditEntity, CreateUserDto, DomainError, DomainResult, User,
    UserRepositoryInterface, ADMIN_ROLE_ID,
};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};

/// Minimum password length on the administrative creation path
pub const MIN_PASSWORD_LEN: usize = 6;

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub expires_in: i64,
    pub user: User,
}

/// User service: orchestrates all identity / user-management use-cases.
///
/// Generic over `R: UserRepositoryInterface` so it stays decoupled from
/// the concrete persistence layer.
pub struct UserService<R: UserRepositoryInterface> {
    repo: Arc<R>,
    jwt_config: JwtConfig,
    audit: AuditLogger,
}

impl<R: UserRepositoryInterface> UserService<R> {
    pub fn new(repo: Arc<R>, jwt_config: JwtConfig, audit: AuditLogger) -> Self {
        Self {
            repo,
            jwt_config,
            audit,
        }
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by name + password and return a JWT.
    ///
    /// An unknown name and a wrong password yield the same error.
    pub async fn login(&self, nombre: &str, password: &str) -> DomainResult<AuthResult> {
        let Some(user) = self.repo.get_user_by_nombre(nombre).await? else {
            return Err(DomainError::InvalidCredentials);
        };

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::InvalidCredentials);
        }

        let token = create_token(user.id, &user.nombre, user.role_id, &self.jwt_config)
            .map_err(|e| DomainError::Crypto(format!("Failed to create token: {}", e)))?;

        info!(user_id = user.id, nombre = %user.nombre, "User logged in");

        Ok(AuthResult {
            token,
            expires_in: self.jwt_config.expires_in(),
            user,
        })
    }

    // ── Registration ────────────────────────────────────────────

    /// Self-service registration. Name format is left to the store's CHECK
    /// constraint; there is no password length rule on this path.
    pub async fn register(&self, nombre: &str, password: &str, role_id: i32) -> DomainResult<i32> {
        let id = self.insert_user(nombre, password, role_id).await?;
        info!(user_id = id, nombre, "New user registered");
        Ok(id)
    }

    /// Administrative creation with explicit name and password rules.
    pub async fn create_user(
        &self,
        nombre: &str,
        password: &str,
        role_id: i32,
    ) -> DomainResult<i32> {
        validate_user_name(nombre)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(DomainError::Validation(format!(
                "La contraseña debe tener al menos {} caracteres.",
                MIN_PASSWORD_LEN
            )));
        }

        let id = self.insert_user(nombre, password, role_id).await?;
        info!(user_id = id, nombre, "User created");

        self.audit
            .record(
                AuditAction::Insert,
                AuditEntity::Usuarios,
                format!("Usuario {} registrado.", nombre),
            )
            .await;

        Ok(id)
    }

    /// Create the configured admin account when no user exists yet.
    ///
    /// Returns `true` if an account was created.
    pub async fn ensure_default_admin(&self, nombre: &str, password: &str) -> DomainResult<bool> {
        if self.repo.count_users().await? > 0 {
            return Ok(false);
        }

        let id = self.insert_user(nombre, password, ADMIN_ROLE_ID).await?;
        info!(user_id = id, nombre, "Default admin created");
        warn!("⚠️  Please change the admin password immediately!");
        Ok(true)
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.repo.list_users().await
    }

    pub async fn get_user_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        self.repo.get_user_by_id(id).await
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Assign a role to a user. An unknown user id is not an error.
    pub async fn assign_role(&self, id: i32, role_id: i32) -> DomainResult<()> {
        let touched = self.repo.update_user_role(id, role_id).await?;
        info!(user_id = id, role_id, touched, "User role updated");

        self.audit
            .record(
                AuditAction::Update,
                AuditEntity::Usuarios,
                format!("Rol actualizado para usuario con ID {}.", id),
            )
            .await;

        Ok(())
    }

    // ── Helpers ─────────────────────────────────────────────────

    async fn insert_user(&self, nombre: &str, password: &str, role_id: i32) -> DomainResult<i32> {
        let password_hash = hash_password(password)
            .map_err(|e| DomainError::Crypto(format!("Failed to hash password: {}", e)))?;

        self.repo
            .create_user(CreateUserDto {
                nombre: nombre.to_string(),
                password_hash,
                role_id,
            })
            .await
    }
}

/// 3 to 50 ASCII letters, nothing else.
pub fn validate_user_name(nombre: &str) -> DomainResult<()> {
    let len = nombre.chars().count();
    if !(3..=50).contains(&len) || !nombre.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::Validation(
            "El nombre debe tener entre 3 y 50 caracteres y solo puede contener letras.".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::audit::testing::RecordingSink;
    use crate::domain::DEFAULT_ROLE_ID;
    use crate::infrastructure::crypto::jwt::verify_token;
    use crate::infrastructure::database::connect_in_memory;
    use crate::infrastructure::database::repositories::UserRepository;

    async fn service() -> (UserService<UserRepository>, Arc<RecordingSink>) {
        let db = connect_in_memory().await.unwrap();
        let sink = Arc::new(RecordingSink::default());
        let service = UserService::new(
            Arc::new(UserRepository::new(db)),
            JwtConfig::new("test-secret", 1),
            AuditLogger::new(sink.clone()),
        );
        (service, sink)
    }

    #[tokio::test]
    async fn register_then_login_returns_valid_token() {
        let (service, _) = service().await;

        let id = service.register("operario", "pw", DEFAULT_ROLE_ID).await.unwrap();
        let auth = service.login("operario", "pw").await.unwrap();

        assert_eq!(auth.user.id, id);
        assert_eq!(auth.expires_in, 3600);
        let claims = verify_token(&auth.token, service.jwt_config()).unwrap();
        assert_eq!(claims.user_id(), Some(id));
        assert_eq!(claims.nombre, "operario");
        assert_eq!(claims.role_id, DEFAULT_ROLE_ID);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_are_indistinguishable() {
        let (service, _) = service().await;
        service.register("operario", "secreto", DEFAULT_ROLE_ID).await.unwrap();

        let wrong = service.login("operario", "otro").await.unwrap_err();
        let unknown = service.login("fantasma", "secreto").await.unwrap_err();

        assert!(matches!(wrong, DomainError::InvalidCredentials));
        assert!(matches!(unknown, DomainError::InvalidCredentials));
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[tokio::test]
    async fn duplicate_registration_is_a_storage_error() {
        let (service, _) = service().await;
        service.register("operario", "pw", DEFAULT_ROLE_ID).await.unwrap();

        assert!(matches!(
            service.register("operario", "pw", DEFAULT_ROLE_ID).await,
            Err(DomainError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn create_user_applies_name_and_password_rules() {
        let (service, sink) = service().await;

        assert!(matches!(
            service.create_user("op3rario", "secreto", DEFAULT_ROLE_ID).await,
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            service.create_user("operario", "corta", DEFAULT_ROLE_ID).await,
            Err(DomainError::Validation(_))
        ));
        assert!(sink.entries().is_empty());

        service.create_user("operario", "secreto", DEFAULT_ROLE_ID).await.unwrap();
        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].accion, AuditAction::Insert);
        assert_eq!(entries[0].entidad, AuditEntity::Usuarios);
    }

    #[tokio::test]
    async fn assign_role_updates_user_and_audits() {
        let (service, sink) = service().await;
        let id = service.register("operario", "pw", DEFAULT_ROLE_ID).await.unwrap();

        service.assign_role(id, ADMIN_ROLE_ID).await.unwrap();

        let user = service.get_user_by_id(id).await.unwrap().unwrap();
        assert_eq!(user.role_id, ADMIN_ROLE_ID);
        assert_eq!(
            sink.entries()[0].descripcion,
            format!("Rol actualizado para usuario con ID {}.", id)
        );
    }

    #[tokio::test]
    async fn default_admin_is_created_only_once() {
        let (service, _) = service().await;

        assert!(service.ensure_default_admin("admin", "admin123").await.unwrap());
        assert!(!service.ensure_default_admin("admin", "admin123").await.unwrap());

        let users = service.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role_id, ADMIN_ROLE_ID);
    }

    #[test]
    fn user_name_rules() {
        assert!(validate_user_name("Ana").is_ok());
        assert!(validate_user_name("ab").is_err());
        assert!(validate_user_name("con espacio").is_err());
        assert!(validate_user_name(&"a".repeat(51)).is_err());
    }
}
