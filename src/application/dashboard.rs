//! Dashboard data: family catalogue and the usage-per-card line series

use crate::domain::Card;

/// Entry of the family selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyOption {
    /// Value stored in `tarjetas.familia`
    pub value: &'static str,
    /// Display label
    pub label: &'static str,
}

const fn family(value: &'static str, label: &'static str) -> FamilyOption {
    FamilyOption { value, label }
}

/// Known product families
pub const FAMILIAS: &[FamilyOption] = &[
    family("FED1", "FED1.0"),
    family("FED2", "FED2.0"),
    family("WL", "WL"),
    family("WSE4", "WSE4"),
    family("PP6", "PARK PILOT"),
    family("BRP", "BRP"),
    family("CLUSTER", "CLUSTER"),
    family("PAD2", "PAD2"),
    family("FPXR", "FPXR"),
    family("LPM", "LPM"),
    family("BK3", "BK3"),
    family("BK4 POWER", "BK4 POWER"),
    family("BK4 LOGIC", "BK4 LOGIC"),
    family("CCON FILTER", "CharCON FILTER"),
    family("CCON MAIN", "CharCON MAIN"),
];

/// Line series of usage count per card code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageSeries {
    /// Family the series was filtered by, `None` for all cards
    pub familia: Option<String>,
    /// X axis: card codes (dmc), in card order
    pub labels: Vec<String>,
    /// Y axis: `veces_usada` of each card
    pub data: Vec<i32>,
}

/// Project cards onto the usage series. An empty family means "all".
pub fn build_usage_series(cards: &[Card], familia: Option<&str>) -> UsageSeries {
    let familia = familia.filter(|f| !f.is_empty());

    let (labels, data): (Vec<String>, Vec<i32>) = cards
        .iter()
        .filter(|card| familia.map_or(true, |f| card.familia == f))
        .map(|card| (card.dmc.clone(), card.contador))
        .unzip();

    UsageSeries {
        familia: familia.map(str::to_string),
        labels,
        data,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn card(id: i32, dmc: &str, familia: &str, contador: i32) -> Card {
        Card {
            id,
            dmc: dmc.to_string(),
            familia: familia.to_string(),
            linea: "LineA".to_string(),
            fecha_creacion: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            contador,
        }
    }

    #[test]
    fn unfiltered_series_keeps_card_order() {
        let cards = vec![card(1, "ABC123", "FED1", 3), card(2, "XYZ789", "WL", 0)];

        let series = build_usage_series(&cards, None);
        assert_eq!(series.familia, None);
        assert_eq!(series.labels, vec!["ABC123", "XYZ789"]);
        assert_eq!(series.data, vec![3, 0]);
    }

    #[test]
    fn filter_matches_family_exactly() {
        let cards = vec![
            card(1, "ABC123", "FED1", 3),
            card(2, "XYZ789", "FED2", 1),
            card(3, "QWE456", "FED1", 7),
        ];

        let series = build_usage_series(&cards, Some("FED1"));
        assert_eq!(series.familia.as_deref(), Some("FED1"));
        assert_eq!(series.labels, vec!["ABC123", "QWE456"]);
        assert_eq!(series.data, vec![3, 7]);

        assert!(build_usage_series(&cards, Some("fed1")).labels.is_empty());
    }

    #[test]
    fn empty_filter_means_all() {
        let cards = vec![card(1, "ABC123", "FED1", 3)];
        assert_eq!(build_usage_series(&cards, Some("")), build_usage_series(&cards, None));
    }

    #[test]
    fn catalogue_values_are_unique() {
        let mut values: Vec<&str> = FAMILIAS.iter().map(|f| f.value).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), FAMILIAS.len());
    }
}
