use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::warn;

use crate::domain::{
    Card, CardRepositoryInterface, DomainError, DomainResult, RegisterCardDto, UsageEvent,
};
use crate::infrastructure::database::entities::{historial_uso, tarjeta};

pub struct CardRepository {
    db: DatabaseConnection,
}

impl CardRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Both writes of a usage record, run against an open transaction.
    async fn apply_usage(
        txn: &DatabaseTransaction,
        card_id: i32,
    ) -> DomainResult<historial_uso::Model> {
        let updated = tarjeta::Entity::update_many()
            .col_expr(
                tarjeta::Column::Contador,
                Expr::col(tarjeta::Column::Contador).add(1),
            )
            .filter(tarjeta::Column::Id.eq(card_id))
            .exec(txn)
            .await
            .map_err(db_err)?;

        if updated.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Tarjeta",
                field: "id",
                value: card_id.to_string(),
            });
        }

        historial_uso::ActiveModel {
            tarjeta_id: Set(card_id),
            fecha_uso: Set(Utc::now()),
            ..Default::default()
        }
        .insert(txn)
        .await
        .map_err(db_err)
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn card_model_to_domain(model: tarjeta::Model) -> Card {
    Card {
        id: model.id,
        dmc: model.dmc,
        familia: model.familia,
        linea: model.linea,
        fecha_creacion: model.fecha_creacion,
        contador: model.contador,
    }
}

fn usage_model_to_domain(model: historial_uso::Model) -> UsageEvent {
    UsageEvent {
        id: model.id,
        tarjeta_id: model.tarjeta_id,
        fecha_uso: model.fecha_uso,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl CardRepositoryInterface for CardRepository {
    async fn list_cards(&self) -> DomainResult<Vec<Card>> {
        let models = tarjeta::Entity::find()
            .order_by_asc(tarjeta::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(card_model_to_domain).collect())
    }

    async fn find_by_dmc(&self, dmc: &str) -> DomainResult<Option<Card>> {
        let model = tarjeta::Entity::find()
            .filter(tarjeta::Column::Dmc.eq(dmc))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(card_model_to_domain))
    }

    async fn find_by_dmc_and_familia(
        &self,
        dmc: &str,
        familia: &str,
    ) -> DomainResult<Option<Card>> {
        let model = tarjeta::Entity::find()
            .filter(tarjeta::Column::Dmc.eq(dmc))
            .filter(tarjeta::Column::Familia.eq(familia))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(card_model_to_domain))
    }

    async fn create_card(&self, dto: RegisterCardDto) -> DomainResult<Card> {
        let new_card = tarjeta::ActiveModel {
            dmc: Set(dto.dmc),
            familia: Set(dto.familia),
            linea: Set(dto.linea),
            fecha_creacion: Set(Utc::now().date_naive()),
            contador: Set(0),
            ..Default::default()
        };

        let model = new_card.insert(&self.db).await.map_err(db_err)?;
        Ok(card_model_to_domain(model))
    }

    async fn reset_counter(&self, card_id: i32) -> DomainResult<()> {
        let result = tarjeta::Entity::update_many()
            .col_expr(tarjeta::Column::Contador, Expr::value(0))
            .filter(tarjeta::Column::Id.eq(card_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Tarjeta",
                field: "id",
                value: card_id.to_string(),
            });
        }

        Ok(())
    }

    async fn record_usage(&self, card_id: i32) -> DomainResult<UsageEvent> {
        let txn = self.db.begin().await.map_err(db_err)?;

        match Self::apply_usage(&txn, card_id).await {
            Ok(event) => {
                txn.commit().await.map_err(db_err)?;
                Ok(usage_model_to_domain(event))
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(card_id, error = %rollback_err, "Rollback of usage record failed");
                }
                Err(e)
            }
        }
    }

    async fn usage_history(&self, card_id: i32) -> DomainResult<Vec<UsageEvent>> {
        let models = historial_uso::Entity::find()
            .filter(historial_uso::Column::TarjetaId.eq(card_id))
            .order_by_asc(historial_uso::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(usage_model_to_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, PaginatorTrait};

    use super::*;
    use crate::infrastructure::database::connect_in_memory;

    fn dto(dmc: &str, familia: &str) -> RegisterCardDto {
        RegisterCardDto {
            dmc: dmc.to_string(),
            familia: familia.to_string(),
            linea: "LineA".to_string(),
        }
    }

    async fn repo() -> (CardRepository, DatabaseConnection) {
        let db = connect_in_memory().await.unwrap();
        (CardRepository::new(db.clone()), db)
    }

    #[tokio::test]
    async fn create_and_find_card() {
        let (repo, _db) = repo().await;

        let card = repo.create_card(dto("ABC123", "FED1")).await.unwrap();
        assert_eq!(card.contador, 0);
        assert_eq!(card.fecha_creacion, Utc::now().date_naive());

        let by_pair = repo.find_by_dmc_and_familia("ABC123", "FED1").await.unwrap();
        assert_eq!(by_pair.map(|c| c.id), Some(card.id));
        assert!(repo
            .find_by_dmc_and_familia("ABC123", "FED2")
            .await
            .unwrap()
            .is_none());
        assert!(repo.find_by_dmc("ABC123").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn check_constraints_reject_malformed_cards() {
        let (repo, _db) = repo().await;

        // dmc shorter than 6 characters
        assert!(matches!(
            repo.create_card(dto("AB1", "FED1")).await,
            Err(DomainError::Storage(_))
        ));
        // familia without any letter
        assert!(repo.create_card(dto("ABC123", "123")).await.is_err());
        // dmc is unique regardless of familia
        repo.create_card(dto("ABC123", "FED1")).await.unwrap();
        assert!(repo.create_card(dto("ABC123", "FED2")).await.is_err());
    }

    #[tokio::test]
    async fn record_usage_increments_counter_and_appends_history() {
        let (repo, _db) = repo().await;
        let card = repo.create_card(dto("ABC123", "FED1")).await.unwrap();

        for _ in 0..3 {
            let event = repo.record_usage(card.id).await.unwrap();
            assert_eq!(event.tarjeta_id, card.id);
        }

        let card = repo.find_by_dmc("ABC123").await.unwrap().unwrap();
        assert_eq!(card.contador, 3);
        assert_eq!(repo.usage_history(card.id).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn record_usage_rolls_back_counter_when_history_insert_fails() {
        let (repo, db) = repo().await;
        let card = repo.create_card(dto("ABC123", "FED1")).await.unwrap();
        repo.record_usage(card.id).await.unwrap();

        db.execute_unprepared("DROP TABLE historial_uso").await.unwrap();

        let result = repo.record_usage(card.id).await;
        assert!(matches!(result, Err(DomainError::Storage(_))));

        let card = repo.find_by_dmc("ABC123").await.unwrap().unwrap();
        assert_eq!(card.contador, 1);
    }

    #[tokio::test]
    async fn record_usage_for_missing_card_is_not_found() {
        let (repo, db) = repo().await;

        let result = repo.record_usage(42).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
        assert_eq!(historial_uso::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn reset_keeps_history_and_delete_cascades() {
        let (repo, db) = repo().await;
        let card = repo.create_card(dto("ABC123", "FED1")).await.unwrap();
        repo.record_usage(card.id).await.unwrap();
        repo.record_usage(card.id).await.unwrap();

        repo.reset_counter(card.id).await.unwrap();
        let reset = repo.find_by_dmc("ABC123").await.unwrap().unwrap();
        assert_eq!(reset.contador, 0);
        assert_eq!(repo.usage_history(card.id).await.unwrap().len(), 2);

        tarjeta::Entity::delete_by_id(card.id).exec(&db).await.unwrap();
        assert_eq!(historial_uso::Entity::find().count(&db).await.unwrap(), 0);
    }
}
