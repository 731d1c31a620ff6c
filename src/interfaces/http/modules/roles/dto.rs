//! Role DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Role;

#[derive(Debug, Serialize, ToSchema)]
pub struct RoleDto {
    pub id: i32,
    pub nombre: String,
}

impl From<Role> for RoleDto {
    fn from(r: Role) -> Self {
        Self {
            id: r.id,
            nombre: r.nombre,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoleRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "El nombre del rol es obligatorio."))]
    pub nombre: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateRoleResponse {
    pub message: String,
    #[serde(rename = "roleId")]
    pub role_id: i32,
}
