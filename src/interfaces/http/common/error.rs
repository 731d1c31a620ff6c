//! HTTP error type
//!
//! Every failure leaves the API as `{"error": "<message>"}`. Internal
//! errors expose only a fixed public message; the cause is logged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::ErrorResponse;
use crate::domain::DomainError;

pub const INVALID_CREDENTIALS: &str = "Credenciales inválidas.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{public}")]
    Internal { public: &'static str, cause: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Map a domain error, using `public` as the message for store and
    /// crypto failures.
    pub fn from_domain(err: DomainError, public: &'static str) -> Self {
        match err {
            DomainError::Validation(msg) => Self::BadRequest(msg),
            DomainError::InvalidCredentials => Self::BadRequest(INVALID_CREDENTIALS.into()),
            DomainError::NotFound { entity, .. } => {
                Self::NotFound(format!("{} no encontrada.", entity))
            }
            err @ (DomainError::Storage(_) | DomainError::Crypto(_)) => Self::Internal {
                public,
                cause: err.to_string(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal { public, ref cause } = self {
            tracing::error!(cause = %cause, "{}", public);
        }

        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// `.or_api("...")` on domain results inside handlers.
pub trait DomainResultExt<T> {
    fn or_api(self, public: &'static str) -> ApiResult<T>;
}

impl<T> DomainResultExt<T> for Result<T, DomainError> {
    fn or_api(self, public: &'static str) -> ApiResult<T> {
        self.map_err(|e| ApiError::from_domain(e, public))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn storage_error_hides_cause() {
        let err = ApiError::from_domain(
            DomainError::Storage("UNIQUE constraint failed: tarjetas.dmc".into()),
            "Error al registrar la tarjeta.",
        );

        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "Error al registrar la tarjeta."}));
    }

    #[tokio::test]
    async fn validation_message_is_passed_through() {
        let err = ApiError::from_domain(DomainError::Validation("falta dmc".into()), "x");

        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "falta dmc");
    }

    #[test]
    fn invalid_credentials_is_bad_request() {
        let err = ApiError::from_domain(DomainError::InvalidCredentials, "x");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), INVALID_CREDENTIALS);
    }

    #[test]
    fn not_found_names_entity() {
        let err = ApiError::from_domain(
            DomainError::NotFound {
                entity: "Tarjeta",
                field: "dmc",
                value: "X".into(),
            },
            "x",
        );
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Tarjeta no encontrada.");
    }
}
