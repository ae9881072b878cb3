//! Pack service: pack lifecycle around the credit ledger.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::pack::{MemberPack, PackStatus};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Service for managing member packs.
pub struct PackService {
    repos: Arc<dyn RepositoryProvider>,
}

impl PackService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create_pack(
        &self,
        client_id: &str,
        total_credits: Option<i32>,
    ) -> DomainResult<MemberPack> {
        if let Some(total) = total_credits {
            if total <= 0 {
                return Err(DomainError::Validation(format!(
                    "total_credits must be positive, got {}",
                    total
                )));
            }
        }

        let pack = MemberPack::new(client_id, total_credits);
        self.repos.packs().save(pack.clone()).await?;
        info!(
            "Created pack {} for {} ({} credits)",
            pack.id,
            pack.client_id,
            pack.total_credits
                .map(|t| t.to_string())
                .unwrap_or_else(|| "unlimited".to_string())
        );
        Ok(pack)
    }

    pub async fn get_pack(&self, id: Uuid) -> DomainResult<MemberPack> {
        self.repos
            .packs()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("MemberPack", "id", id))
    }

    pub async fn list_packs(&self, client_id: Option<&str>) -> DomainResult<Vec<MemberPack>> {
        self.repos.packs().find_all(client_id).await
    }

    /// ACTIVE -> PAUSED. A paused pack rejects reservations until resumed.
    pub async fn pause_pack(&self, id: Uuid) -> DomainResult<MemberPack> {
        self.transition(id, PackStatus::Active, PackStatus::Paused).await
    }

    /// PAUSED -> ACTIVE.
    pub async fn resume_pack(&self, id: Uuid) -> DomainResult<MemberPack> {
        self.transition(id, PackStatus::Paused, PackStatus::Active).await
    }

    async fn transition(
        &self,
        id: Uuid,
        from: PackStatus,
        to: PackStatus,
    ) -> DomainResult<MemberPack> {
        let pack = self.get_pack(id).await?;
        if pack.status != from {
            return Err(DomainError::InvalidTransition(format!(
                "pack {} is {}, expected {}",
                id, pack.status, from
            )));
        }
        self.repos.packs().update_status(id, to).await?;
        self.get_pack(id).await
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{test_db, test_repos};

    async fn service() -> PackService {
        PackService::new(test_repos(test_db().await))
    }

    #[tokio::test]
    async fn pause_and_resume_round_trip() {
        let svc = service().await;
        let pack = svc.create_pack("client-1", Some(10)).await.unwrap();

        let paused = svc.pause_pack(pack.id).await.unwrap();
        assert_eq!(paused.status, PackStatus::Paused);

        let resumed = svc.resume_pack(pack.id).await.unwrap();
        assert_eq!(resumed.status, PackStatus::Active);
    }

    #[tokio::test]
    async fn resume_requires_paused() {
        let svc = service().await;
        let pack = svc.create_pack("client-1", Some(10)).await.unwrap();
        assert!(matches!(
            svc.resume_pack(pack.id).await,
            Err(DomainError::InvalidTransition(_))
        ));
    }

    #[tokio::test]
    async fn non_positive_total_is_rejected() {
        let svc = service().await;
        assert!(matches!(
            svc.create_pack("client-1", Some(0)).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn ledger_reserve_and_release_through_repo() {
        let svc = service().await;
        let pack = svc.create_pack("client-1", Some(2)).await.unwrap();
        let repos = &svc.repos;

        let after = repos.packs().reserve_credit(pack.id).await.unwrap();
        assert_eq!(after.credits_remaining, 1);

        let after = repos.packs().reserve_credit(pack.id).await.unwrap();
        assert_eq!(after.credits_remaining, 0);
        assert_eq!(after.status, PackStatus::Used);

        assert!(matches!(
            repos.packs().reserve_credit(pack.id).await,
            Err(DomainError::InsufficientCredit(_))
        ));

        let after = repos.packs().release_credit(pack.id).await.unwrap();
        assert_eq!(after.credits_remaining, 1);
        assert_eq!(after.status, PackStatus::Active);

        // Release is capped at total_credits.
        repos.packs().release_credit(pack.id).await.unwrap();
        let after = repos.packs().release_credit(pack.id).await.unwrap();
        assert_eq!(after.credits_remaining, 2);
    }

    #[tokio::test]
    async fn paused_pack_cannot_reserve() {
        let svc = service().await;
        let pack = svc.create_pack("client-1", Some(2)).await.unwrap();
        svc.pause_pack(pack.id).await.unwrap();

        assert!(matches!(
            svc.repos.packs().reserve_credit(pack.id).await,
            Err(DomainError::InsufficientCredit(_))
        ));
    }
}
