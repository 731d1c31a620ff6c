//! User management API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateUserRequest, CreateUserResponse, UpdateRoleRequest, UserDto};
use crate::application::UserService;
use crate::infrastructure::database::repositories::UserRepository;
use crate::interfaces::http::common::{
    ApiError, ApiResult, DomainResultExt, ErrorResponse, ValidatedJson,
};

#[derive(Clone)]
pub struct UserHandlerState {
    pub users: Arc<UserService<UserRepository>>,
}

#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "Usuarios",
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 404, description = "No users", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<UserHandlerState>) -> ApiResult<Json<Vec<UserDto>>> {
    let users = state
        .users
        .list_users()
        .await
        .or_api("Error al obtener los usuarios.")?;

    if users.is_empty() {
        return Err(ApiError::NotFound("No se encontraron usuarios.".into()));
    }

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "Usuarios",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Missing fields, bad name or short password", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<CreateUserResponse>)> {
    let Some(role_id) = request.role_id else {
        return Err(ApiError::bad_request(
            "Todos los campos son obligatorios (nombre, password, role_id).",
        ));
    };

    let usuario_id = state
        .users
        .create_user(&request.nombre, &request.password, role_id)
        .await
        .or_api("Error al registrar el usuario.")?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: "Usuario registrado correctamente".to_string(),
            usuario_id,
        }),
    ))
}

/// Assign a role. An id with no matching user still answers 200.
#[utoipa::path(
    put,
    path = "/usuarios/{id}/role",
    tag = "Usuarios",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing role_id", body = ErrorResponse),
        (status = 500, description = "Store error (e.g. unknown role)", body = ErrorResponse)
    )
)]
pub async fn update_user_role(
    State(state): State<UserHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRoleRequest>,
) -> ApiResult<&'static str> {
    let Some(role_id) = request.role_id else {
        return Err(ApiError::bad_request("El rol es obligatorio."));
    };

    state
        .users
        .assign_role(id, role_id)
        .await
        .or_api("Error al asignar el rol.")?;

    Ok("Rol actualizado correctamente.")
}
