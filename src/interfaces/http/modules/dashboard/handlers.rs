//! Dashboard API handlers

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{FamilyDto, UsageQuery, UsageSeriesDto};
use crate::application::dashboard::FAMILIAS;
use crate::interfaces::http::common::{ApiResult, DomainResultExt, ErrorResponse};
use crate::interfaces::http::modules::cards::CardHandlerState;

#[utoipa::path(
    get,
    path = "/api/dashboard/familias",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Known product families", body = Vec<FamilyDto>)
    )
)]
pub async fn list_families() -> Json<Vec<FamilyDto>> {
    Json(FAMILIAS.iter().map(FamilyDto::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/dashboard/uso",
    tag = "Dashboard",
    params(UsageQuery),
    responses(
        (status = 200, description = "Usage per card", body = UsageSeriesDto),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn usage_series(
    State(state): State<CardHandlerState>,
    Query(query): Query<UsageQuery>,
) -> ApiResult<Json<UsageSeriesDto>> {
    let series = state
        .cards
        .usage_series(query.familia.as_deref())
        .await
        .or_api("Error al obtener las tarjetas.")?;

    Ok(Json(series.into()))
}
