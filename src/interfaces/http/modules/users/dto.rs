//! User DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::User;

/// User API representation
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub nombre: String,
    pub role_id: i32,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            nombre: u.nombre,
            role_id: u.role_id,
        }
    }
}

/// Name and password rules are applied by the service.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(length(
        min = 1,
        message = "Todos los campos son obligatorios (nombre, password, role_id)."
    ))]
    pub nombre: String,
    #[serde(default)]
    #[validate(length(
        min = 1,
        message = "Todos los campos son obligatorios (nombre, password, role_id)."
    ))]
    pub password: String,
    #[validate(required(message = "Todos los campos son obligatorios (nombre, password, role_id)."))]
    pub role_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateUserResponse {
    pub message: String,
    #[serde(rename = "usuarioId")]
    pub usuario_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoleRequest {
    #[validate(required(message = "El rol es obligatorio."))]
    pub role_id: Option<i32>,
}
