//! Repository interface for member packs, including the credit ledger.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::DomainResult;

use super::{MemberPack, PackStatus};

#[async_trait]
pub trait PackRepository: Send + Sync {
    async fn save(&self, pack: MemberPack) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<MemberPack>>;

    /// All packs, optionally scoped to one client, newest first.
    async fn find_all(&self, client_id: Option<&str>) -> DomainResult<Vec<MemberPack>>;

    /// Atomically reserve one credit: requires `status == ACTIVE` and, for
    /// finite packs, `credits_remaining > 0`; decrements by one (no-op for
    /// unlimited packs) and flips a finite pack to USED when it reaches
    /// zero. Fails with `InsufficientCredit` if the precondition does not
    /// hold at evaluation time, even under concurrent callers.
    async fn reserve_credit(&self, pack_id: Uuid) -> DomainResult<MemberPack>;

    /// Atomically return one credit: increments `credits_remaining`
    /// (capped at `total_credits`, no-op for unlimited packs) and flips
    /// USED back to ACTIVE. The ledger does not track which booking
    /// released which credit; callers invoke this at most once per
    /// refused booking.
    async fn release_credit(&self, pack_id: Uuid) -> DomainResult<MemberPack>;

    /// Plain status write, used by the pause/resume lifecycle. Transition
    /// legality is checked by the caller.
    async fn update_status(&self, pack_id: Uuid, status: PackStatus) -> DomainResult<()>;
}
