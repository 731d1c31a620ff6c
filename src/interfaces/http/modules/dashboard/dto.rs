//! Dashboard DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::dashboard::{FamilyOption, UsageSeries};

#[derive(Debug, Serialize, ToSchema)]
pub struct FamilyDto {
    pub value: String,
    pub label: String,
}

impl From<&FamilyOption> for FamilyDto {
    fn from(f: &FamilyOption) -> Self {
        Self {
            value: f.value.to_string(),
            label: f.label.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UsageQuery {
    /// Family to filter by; empty or absent means all cards
    pub familia: Option<String>,
}

/// Line chart data: `labels[i]` is a dmc, `data[i]` its `veces_usada`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UsageSeriesDto {
    pub familia: Option<String>,
    pub labels: Vec<String>,
    pub data: Vec<i32>,
}

impl From<UsageSeries> for UsageSeriesDto {
    fn from(s: UsageSeries) -> Self {
        Self {
            familia: s.familia,
            labels: s.labels,
            data: s.data,
        }
    }
}
