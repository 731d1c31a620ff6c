//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};

use super::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserInfo};
use crate::application::UserService;
use crate::infrastructure::database::repositories::UserRepository;
use crate::interfaces::http::common::{
    ApiError, ApiResult, DomainResultExt, ErrorResponse, MessageResponse, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Auth state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub users: Arc<UserService<UserRepository>>,
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = RegisterResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 500, description = "Store error (e.g. duplicate name)", body = ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let Some(role_id) = request.role_id else {
        return Err(ApiError::bad_request("Todos los campos son obligatorios."));
    };

    let user_id = state
        .users
        .register(&request.nombre, &request.password, role_id)
        .await
        .or_api("Hubo un error al registrar el usuario.")?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Usuario registrado con éxito.".to_string(),
            user_id,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = LoginResponse),
        (status = 400, description = "Missing fields or invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let auth = state
        .users
        .login(&request.nombre, &request.password)
        .await
        .or_api("Error al buscar el usuario.")?;

    Ok(Json(LoginResponse {
        message: "Inicio de sesión exitoso".to_string(),
        token: auth.token,
        user: auth.user.into(),
    }))
}

/// Tokens are stateless; logging out is only acknowledged.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Authentication",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse)
    )
)]
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse::new("Sesión cerrada con éxito"))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Authentication",
    responses(
        (status = 200, description = "Current user", body = UserInfo),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_current_user(Extension(user): Extension<AuthenticatedUser>) -> Json<UserInfo> {
    Json(user.into())
}
