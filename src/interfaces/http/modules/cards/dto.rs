//! Card DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Card, RegisterCardDto, UsageEvent};

/// Card API representation. The usage counter is exposed as `veces_usada`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CardDto {
    pub id: i32,
    pub dmc: String,
    pub familia: String,
    pub linea: String,
    pub fecha_creacion: NaiveDate,
    pub veces_usada: i32,
}

impl From<Card> for CardDto {
    fn from(c: Card) -> Self {
        Self {
            id: c.id,
            dmc: c.dmc,
            familia: c.familia,
            linea: c.linea,
            fecha_creacion: c.fecha_creacion,
            veces_usada: c.contador,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterCardRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Todos los campos son obligatorios."))]
    pub dmc: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Todos los campos son obligatorios."))]
    pub familia: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Todos los campos son obligatorios."))]
    pub linea: String,
}

impl From<RegisterCardRequest> for RegisterCardDto {
    fn from(r: RegisterCardRequest) -> Self {
        Self {
            dmc: r.dmc,
            familia: r.familia,
            linea: r.linea,
        }
    }
}

/// `tarjetaId` is only present when a new card was inserted.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterCardResponse {
    pub message: String,
    #[serde(rename = "tarjetaId", skip_serializing_if = "Option::is_none")]
    pub tarjeta_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UsageEventDto {
    pub id: i32,
    pub tarjeta_id: i32,
    pub fecha_uso: DateTime<Utc>,
}

impl From<UsageEvent> for UsageEventDto {
    fn from(e: UsageEvent) -> Self {
        Self {
            id: e.id,
            tarjeta_id: e.tarjeta_id,
            fecha_uso: e.fecha_uso,
        }
    }
}
