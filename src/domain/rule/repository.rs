//! Repository interface for availability rules

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::DomainResult;

use super::AvailabilityRule;

#[async_trait]
pub trait RuleRepository: Send + Sync {
    async fn save(&self, rule: AvailabilityRule) -> DomainResult<()>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<AvailabilityRule>>;
    async fn find_all(&self) -> DomainResult<Vec<AvailabilityRule>>;
    async fn update(&self, rule: AvailabilityRule) -> DomainResult<()>;
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
