use async_trait::async_trait;

use super::{CreateUserDto, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    /// Insert a user and return its id.
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<i32>;

    async fn list_users(&self) -> DomainResult<Vec<User>>;
    async fn get_user_by_nombre(&self, nombre: &str) -> DomainResult<Option<User>>;
    async fn get_user_by_id(&self, id: i32) -> DomainResult<Option<User>>;
    async fn count_users(&self) -> DomainResult<u64>;

    /// Returns the number of rows touched (0 when the id does not exist).
    async fn update_user_role(&self, id: i32, role_id: i32) -> DomainResult<u64>;
}
