//! Card service: application-layer orchestration
//!
//! HTTP handlers stay thin and delegate here. Every mutating use-case
//! writes one audit entry once its store write has gone through.

use std::sync::Arc;

use tracing::info;

use crate::application::audit::AuditLogger;
use crate::application::dashboard::{build_usage_series, UsageSeries};
use crate::domain::{
    AuditAction, AuditEntity, Card, CardRegistration, CardRepositoryInterface, DomainError,
    DomainResult, RegisterCardDto, UsageEvent,
};

/// Card service, generic over the persistence layer.
pub struct CardService<R: CardRepositoryInterface> {
    repo: Arc<R>,
    audit: AuditLogger,
}

impl<R: CardRepositoryInterface> CardService<R> {
    pub fn new(repo: Arc<R>, audit: AuditLogger) -> Self {
        Self { repo, audit }
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn list_cards(&self) -> DomainResult<Vec<Card>> {
        self.repo.list_cards().await
    }

    /// Usage events of the card with the given dmc, oldest first.
    pub async fn usage_history(&self, dmc: &str) -> DomainResult<Vec<UsageEvent>> {
        let card = self.require_card(dmc).await?;
        self.repo.usage_history(card.id).await
    }

    /// Dashboard series of `veces_usada` per dmc, optionally for one family.
    pub async fn usage_series(&self, familia: Option<&str>) -> DomainResult<UsageSeries> {
        let cards = self.repo.list_cards().await?;
        Ok(build_usage_series(&cards, familia))
    }

    // ── Commands ────────────────────────────────────────────────

    /// Register a card, or reset its counter if (dmc, familia) already exists.
    pub async fn register_card(&self, dto: RegisterCardDto) -> DomainResult<CardRegistration> {
        if dto.dmc.is_empty() || dto.familia.is_empty() || dto.linea.is_empty() {
            return Err(DomainError::Validation(
                "Todos los campos son obligatorios.".into(),
            ));
        }

        let existing = self
            .repo
            .find_by_dmc_and_familia(&dto.dmc, &dto.familia)
            .await?;

        if let Some(card) = existing {
            self.repo.reset_counter(card.id).await?;
            metrics::counter!("tarjetas_resets_total").increment(1);
            info!(card_id = card.id, dmc = %dto.dmc, familia = %dto.familia, "Card counter reset");

            self.audit
                .record(
                    AuditAction::Update,
                    AuditEntity::Tarjetas,
                    format!(
                        "Contador de tarjeta {} (familia: {}) reiniciado.",
                        dto.dmc, dto.familia
                    ),
                )
                .await;

            return Ok(CardRegistration::Reset { id: card.id });
        }

        let descripcion = format!("Tarjeta {} (familia: {}) registrada.", dto.dmc, dto.familia);
        let card = self.repo.create_card(dto).await?;
        metrics::counter!("tarjetas_registered_total").increment(1);
        info!(card_id = card.id, dmc = %card.dmc, familia = %card.familia, "Card registered");

        self.audit
            .record(AuditAction::Insert, AuditEntity::Tarjetas, descripcion)
            .await;

        Ok(CardRegistration::Created { id: card.id })
    }

    /// Record one use of the card: counter + 1 and one history row, atomically.
    pub async fn record_usage(&self, dmc: &str) -> DomainResult<UsageEvent> {
        let card = self.require_card(dmc).await?;

        let event = self.repo.record_usage(card.id).await?;
        metrics::counter!("tarjetas_usage_total").increment(1);
        info!(card_id = card.id, dmc, "Card usage recorded");

        self.audit
            .record(
                AuditAction::Update,
                AuditEntity::Tarjetas,
                format!("Contador incrementado para tarjeta {}.", dmc),
            )
            .await;

        Ok(event)
    }

    // ── Helpers ─────────────────────────────────────────────────

    async fn require_card(&self, dmc: &str) -> DomainResult<Card> {
        self.repo
            .find_by_dmc(dmc)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Tarjeta",
                field: "dmc",
                value: dmc.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, DatabaseConnection};

    use super::*;
    use crate::application::audit::testing::{FailingSink, RecordingSink};
    use crate::domain::{AuditSink, NewAuditEntry};
    use crate::infrastructure::database::connect_in_memory;
    use crate::infrastructure::database::repositories::CardRepository;

    struct Fixture {
        service: CardService<CardRepository>,
        sink: Arc<RecordingSink>,
        db: DatabaseConnection,
    }

    async fn fixture() -> Fixture {
        let db = connect_in_memory().await.unwrap();
        let sink = Arc::new(RecordingSink::default());
        let service = CardService::new(
            Arc::new(CardRepository::new(db.clone())),
            AuditLogger::new(sink.clone()),
        );
        Fixture { service, sink, db }
    }

    fn dto(dmc: &str, familia: &str) -> RegisterCardDto {
        RegisterCardDto {
            dmc: dmc.to_string(),
            familia: familia.to_string(),
            linea: "LineA".to_string(),
        }
    }

    #[tokio::test]
    async fn register_new_pair_creates_one_card() {
        let f = fixture().await;

        let outcome = f.service.register_card(dto("ABC123", "FED1")).await.unwrap();
        assert!(matches!(outcome, CardRegistration::Created { .. }));

        let cards = f.service.list_cards().await.unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].contador, 0);
        assert_eq!(
            f.sink.entries(),
            vec![NewAuditEntry::new(
                AuditAction::Insert,
                AuditEntity::Tarjetas,
                "Tarjeta ABC123 (familia: FED1) registrada."
            )]
        );
    }

    #[tokio::test]
    async fn usage_then_reregister_resets_counter_but_keeps_history() {
        let f = fixture().await;
        let created = f.service.register_card(dto("ABC123", "FED1")).await.unwrap();

        for _ in 0..3 {
            f.service.record_usage("ABC123").await.unwrap();
        }
        let cards = f.service.list_cards().await.unwrap();
        assert_eq!(cards[0].contador, 3);
        assert_eq!(f.service.usage_history("ABC123").await.unwrap().len(), 3);

        let outcome = f.service.register_card(dto("ABC123", "FED1")).await.unwrap();
        assert_eq!(outcome, CardRegistration::Reset { id: created.id() });

        let cards = f.service.list_cards().await.unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].contador, 0);

        let history = f.service.usage_history("ABC123").await.unwrap();
        assert_eq!(history.len(), 3);
        assert!(history.iter().all(|e| e.tarjeta_id == created.id()));

        let last = f.sink.entries().pop().unwrap();
        assert_eq!(last.accion, AuditAction::Update);
        assert_eq!(last.descripcion, "Contador de tarjeta ABC123 (familia: FED1) reiniciado.");
    }

    #[tokio::test]
    async fn usage_of_unknown_dmc_is_not_found() {
        let f = fixture().await;

        let result = f.service.record_usage("NOPE000").await;
        assert!(matches!(result, Err(DomainError::NotFound { field: "dmc", .. })));
        assert!(f.sink.entries().is_empty());
    }

    #[tokio::test]
    async fn failed_history_insert_leaves_counter_and_audit_untouched() {
        let f = fixture().await;
        f.service.register_card(dto("ABC123", "FED1")).await.unwrap();
        let audited_before = f.sink.entries().len();

        f.db.execute_unprepared("DROP TABLE historial_uso").await.unwrap();

        assert!(matches!(
            f.service.record_usage("ABC123").await,
            Err(DomainError::Storage(_))
        ));
        assert_eq!(f.service.list_cards().await.unwrap()[0].contador, 0);
        assert_eq!(f.sink.entries().len(), audited_before);
    }

    #[tokio::test]
    async fn empty_fields_are_rejected_before_touching_the_store() {
        let f = fixture().await;

        let result = f.service.register_card(dto("", "FED1")).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(f.service.list_cards().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn audit_failure_does_not_fail_registration() {
        let db = connect_in_memory().await.unwrap();
        let failing: Arc<dyn AuditSink> = Arc::new(FailingSink);
        let service = CardService::new(
            Arc::new(CardRepository::new(db)),
            AuditLogger::new(failing),
        );

        assert!(service.register_card(dto("ABC123", "FED1")).await.is_ok());
        assert!(service.record_usage("ABC123").await.is_ok());
    }

    #[tokio::test]
    async fn usage_series_filters_by_family() {
        let f = fixture().await;
        f.service.register_card(dto("ABC123", "FED1")).await.unwrap();
        f.service.register_card(dto("XYZ789", "WSE4")).await.unwrap();
        f.service.record_usage("XYZ789").await.unwrap();

        let all = f.service.usage_series(None).await.unwrap();
        assert_eq!(all.labels, vec!["ABC123", "XYZ789"]);
        assert_eq!(all.data, vec![0, 1]);

        let wse4 = f.service.usage_series(Some("WSE4")).await.unwrap();
        assert_eq!(wse4.labels, vec!["XYZ789"]);
        assert_eq!(wse4.data, vec![1]);
    }
}
