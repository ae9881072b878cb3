//! Repository interface for availability slots

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::DomainResult;

use super::AvailabilitySlot;

#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Insert the slot unless a slot with the exact same `(start_at,
    /// end_at)` already exists. Returns `true` if a row was inserted.
    ///
    /// This is the dedupe that makes rule expansion idempotent; the
    /// implementation must enforce it at the storage level (unique index)
    /// so concurrent expansion runs cannot duplicate slots either.
    async fn insert_if_absent(&self, slot: AvailabilitySlot) -> DomainResult<bool>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<AvailabilitySlot>>;

    /// Slots overlapping `[from, to)`, ordered by start.
    async fn find_in_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<AvailabilitySlot>>;

    async fn find_all(&self) -> DomainResult<Vec<AvailabilitySlot>>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
