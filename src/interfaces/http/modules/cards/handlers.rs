//! Card API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{CardDto, RegisterCardRequest, RegisterCardResponse, UsageEventDto};
use crate::application::CardService;
use crate::domain::CardRegistration;
use crate::infrastructure::database::repositories::CardRepository;
use crate::interfaces::http::common::{
    ApiError, ApiResult, DomainResultExt, ErrorResponse, ValidatedJson,
};

#[derive(Clone)]
pub struct CardHandlerState {
    pub cards: Arc<CardService<CardRepository>>,
}

#[utoipa::path(
    get,
    path = "/tarjetas",
    tag = "Tarjetas",
    responses(
        (status = 200, description = "All cards", body = Vec<CardDto>),
        (status = 404, description = "No cards registered", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn list_cards(State(state): State<CardHandlerState>) -> ApiResult<Json<Vec<CardDto>>> {
    let cards = state
        .cards
        .list_cards()
        .await
        .or_api("Error al obtener las tarjetas.")?;

    if cards.is_empty() {
        return Err(ApiError::NotFound("No se encontraron tarjetas.".into()));
    }

    Ok(Json(cards.into_iter().map(CardDto::from).collect()))
}

/// Register a card; an existing (dmc, familia) pair has its counter reset.
#[utoipa::path(
    post,
    path = "/tarjetas",
    tag = "Tarjetas",
    request_body = RegisterCardRequest,
    responses(
        (status = 200, description = "Card created or counter reset", body = RegisterCardResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn register_card(
    State(state): State<CardHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterCardRequest>,
) -> ApiResult<Json<RegisterCardResponse>> {
    let dmc = request.dmc.clone();
    let familia = request.familia.clone();

    let outcome = state
        .cards
        .register_card(request.into())
        .await
        .or_api("Error interno al registrar la tarjeta.")?;

    let response = match outcome {
        CardRegistration::Reset { .. } => RegisterCardResponse {
            message: format!(
                "Tarjeta {} (familia: {}) ya existía, contador reiniciado a 0.",
                dmc, familia
            ),
            tarjeta_id: None,
        },
        CardRegistration::Created { id } => RegisterCardResponse {
            message: "Tarjeta registrada correctamente".to_string(),
            tarjeta_id: Some(id),
        },
    };

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/usar/{dmc}",
    tag = "Tarjetas",
    params(("dmc" = String, Path, description = "Card code")),
    responses(
        (status = 200, description = "Counter incremented", body = String, content_type = "text/plain"),
        (status = 404, description = "Card not found", body = ErrorResponse),
        (status = 500, description = "Transaction rolled back", body = ErrorResponse)
    )
)]
pub async fn use_card(
    State(state): State<CardHandlerState>,
    Path(dmc): Path<String>,
) -> ApiResult<&'static str> {
    state
        .cards
        .record_usage(&dmc)
        .await
        .or_api("Error al actualizar el contador.")?;

    Ok("Contador actualizado correctamente.")
}

#[utoipa::path(
    get,
    path = "/tarjetas/{dmc}/historial",
    tag = "Tarjetas",
    params(("dmc" = String, Path, description = "Card code")),
    responses(
        (status = 200, description = "Usage events, oldest first", body = Vec<UsageEventDto>),
        (status = 404, description = "Card not found", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn usage_history(
    State(state): State<CardHandlerState>,
    Path(dmc): Path<String>,
) -> ApiResult<Json<Vec<UsageEventDto>>> {
    let events = state
        .cards
        .usage_history(&dmc)
        .await
        .or_api("Error al obtener el historial de uso.")?;

    Ok(Json(events.into_iter().map(UsageEventDto::from).collect()))
}
