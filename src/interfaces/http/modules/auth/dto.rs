//! Authentication DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::User;
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Todos los campos son obligatorios."))]
    pub nombre: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Todos los campos son obligatorios."))]
    pub password: String,
    #[validate(required(message = "Todos los campos son obligatorios."))]
    pub role_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Todos los campos son obligatorios."))]
    pub nombre: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Todos los campos son obligatorios."))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserInfo {
    pub id: i32,
    pub nombre: String,
    pub role_id: i32,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nombre: user.nombre,
            role_id: user.role_id,
        }
    }
}

impl From<AuthenticatedUser> for UserInfo {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.user_id,
            nombre: user.nombre,
            role_id: user.role_id,
        }
    }
}
