use async_trait::async_trait;

use super::{Card, RegisterCardDto, UsageEvent};
use crate::domain::DomainResult;

#[async_trait]
pub trait CardRepositoryInterface: Send + Sync {
    async fn list_cards(&self) -> DomainResult<Vec<Card>>;
    async fn find_by_dmc(&self, dmc: &str) -> DomainResult<Option<Card>>;
    async fn find_by_dmc_and_familia(&self, dmc: &str, familia: &str)
        -> DomainResult<Option<Card>>;

    async fn create_card(&self, dto: RegisterCardDto) -> DomainResult<Card>;
    async fn reset_counter(&self, card_id: i32) -> DomainResult<()>;

    /// Increment the counter and append a usage event as one atomic unit.
    ///
    /// Either both writes are committed or neither is.
    async fn record_usage(&self, card_id: i32) -> DomainResult<UsageEvent>;

    async fn usage_history(&self, card_id: i32) -> DomainResult<Vec<UsageEvent>>;
}
