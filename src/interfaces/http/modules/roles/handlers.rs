//! Role API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{CreateRoleRequest, CreateRoleResponse, RoleDto};
use crate::application::RoleService;
use crate::infrastructure::database::repositories::RoleRepository;
use crate::interfaces::http::common::{ApiResult, DomainResultExt, ErrorResponse, ValidatedJson};

#[derive(Clone)]
pub struct RoleHandlerState {
    pub roles: Arc<RoleService<RoleRepository>>,
}

#[utoipa::path(
    get,
    path = "/roles",
    tag = "Roles",
    responses(
        (status = 200, description = "All roles", body = Vec<RoleDto>),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn list_roles(State(state): State<RoleHandlerState>) -> ApiResult<Json<Vec<RoleDto>>> {
    let roles = state
        .roles
        .list_roles()
        .await
        .or_api("Error al obtener los roles.")?;

    Ok(Json(roles.into_iter().map(RoleDto::from).collect()))
}

#[utoipa::path(
    post,
    path = "/roles",
    tag = "Roles",
    request_body = CreateRoleRequest,
    responses(
        (status = 201, description = "Role created", body = CreateRoleResponse),
        (status = 400, description = "Missing name", body = ErrorResponse),
        (status = 500, description = "Store error (e.g. duplicate name)", body = ErrorResponse)
    )
)]
pub async fn create_role(
    State(state): State<RoleHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateRoleRequest>,
) -> ApiResult<(StatusCode, Json<CreateRoleResponse>)> {
    let role_id = state
        .roles
        .create_role(&request.nombre)
        .await
        .or_api("Error al crear el rol.")?;

    Ok((
        StatusCode::CREATED,
        Json(CreateRoleResponse {
            message: "Rol creado correctamente".to_string(),
            role_id,
        }),
    ))
}
