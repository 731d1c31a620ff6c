use chrono::{DateTime, NaiveDate, Utc};

/// A tracked physical card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: i32,
    /// Unique alphanumeric code printed on the card
    pub dmc: String,
    /// Product family
    pub familia: String,
    /// Product line
    pub linea: String,
    pub fecha_creacion: NaiveDate,
    /// Number of recorded uses since creation or the last reset
    pub contador: i32,
}

/// One recorded use of a card (`historial_uso` row)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEvent {
    pub id: i32,
    pub tarjeta_id: i32,
    pub fecha_uso: DateTime<Utc>,
}

/// Outcome of registering a card by (dmc, familia)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRegistration {
    /// No card matched; a new row was inserted
    Created { id: i32 },
    /// The pair already existed; its counter went back to zero
    Reset { id: i32 },
}

impl CardRegistration {
    pub fn id(&self) -> i32 {
        match self {
            Self::Created { id } | Self::Reset { id } => *id,
        }
    }
}
