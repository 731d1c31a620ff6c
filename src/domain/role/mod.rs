//! Role aggregate

use async_trait::async_trait;

use crate::domain::DomainResult;

/// Well-known role ids seeded at startup.
pub const ADMIN_ROLE_ID: i32 = 1;
/// Default role of `usuarios.role_id`, also the fallback when a role is deleted.
pub const DEFAULT_ROLE_ID: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i32,
    pub nombre: String,
}

#[async_trait]
pub trait RoleRepositoryInterface: Send + Sync {
    async fn list_roles(&self) -> DomainResult<Vec<Role>>;
    async fn create_role(&self, nombre: &str) -> DomainResult<i32>;
}
