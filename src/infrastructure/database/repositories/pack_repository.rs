//! SeaORM implementation of PackRepository (the credit ledger)
//!
//! Ledger mutations are conditional `UPDATE … WHERE <precondition>`
//! statements with rows-affected checks, so concurrent callers targeting
//! the same pack cannot drive `credits_remaining` negative or past
//! `total_credits`. The helpers are generic over `ConnectionTrait` so the
//! booking repository can run them inside its own transaction.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;
use uuid::Uuid;

use crate::domain::pack::{MemberPack, PackRepository, PackStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::member_pack;

use super::db_err;

pub struct SeaOrmPackRepository {
    db: DatabaseConnection,
}

impl SeaOrmPackRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(crate) fn model_to_domain(m: member_pack::Model) -> MemberPack {
    MemberPack {
        id: m.id,
        client_id: m.client_id,
        total_credits: m.total_credits,
        credits_remaining: m.credits_remaining,
        status: PackStatus::from_str(&m.status),
        activated_at: m.activated_at,
        created_at: m.created_at,
    }
}

// ── Ledger operations (shared with the booking transaction) ─────

async fn fetch_pack<C: ConnectionTrait>(conn: &C, pack_id: Uuid) -> DomainResult<member_pack::Model> {
    member_pack::Entity::find_by_id(pack_id)
        .one(conn)
        .await
        .map_err(db_err)?
        .ok_or_else(|| DomainError::not_found("MemberPack", "id", pack_id))
}

/// Reserve one credit. See `PackRepository::reserve_credit`.
pub(crate) async fn reserve_credit_on<C: ConnectionTrait>(
    conn: &C,
    pack_id: Uuid,
) -> DomainResult<MemberPack> {
    let pack = fetch_pack(conn, pack_id).await?;

    if pack.total_credits.is_none() {
        // Unlimited packs never decrement; only the status gates them.
        if PackStatus::from_str(&pack.status) != PackStatus::Active {
            return Err(DomainError::InsufficientCredit(pack_id.to_string()));
        }
        return Ok(model_to_domain(pack));
    }

    let decremented = member_pack::Entity::update_many()
        .col_expr(
            member_pack::Column::CreditsRemaining,
            Expr::col(member_pack::Column::CreditsRemaining).sub(1),
        )
        .filter(member_pack::Column::Id.eq(pack_id))
        .filter(member_pack::Column::Status.eq(PackStatus::Active.as_str()))
        .filter(member_pack::Column::CreditsRemaining.gt(0))
        .exec(conn)
        .await
        .map_err(db_err)?;

    if decremented.rows_affected == 0 {
        // Held moments ago perhaps, but not at evaluation time.
        return Err(DomainError::InsufficientCredit(pack_id.to_string()));
    }

    // A finite pack that just hit zero flips to USED.
    member_pack::Entity::update_many()
        .col_expr(
            member_pack::Column::Status,
            Expr::value(PackStatus::Used.as_str()),
        )
        .filter(member_pack::Column::Id.eq(pack_id))
        .filter(member_pack::Column::CreditsRemaining.eq(0))
        .filter(member_pack::Column::TotalCredits.is_not_null())
        .exec(conn)
        .await
        .map_err(db_err)?;

    fetch_pack(conn, pack_id).await.map(model_to_domain)
}

/// Return one credit. See `PackRepository::release_credit`.
pub(crate) async fn release_credit_on<C: ConnectionTrait>(
    conn: &C,
    pack_id: Uuid,
) -> DomainResult<MemberPack> {
    let pack = fetch_pack(conn, pack_id).await?;

    if pack.total_credits.is_some() {
        // Increment, capped at total_credits.
        member_pack::Entity::update_many()
            .col_expr(
                member_pack::Column::CreditsRemaining,
                Expr::col(member_pack::Column::CreditsRemaining).add(1),
            )
            .filter(member_pack::Column::Id.eq(pack_id))
            .filter(
                Expr::col(member_pack::Column::CreditsRemaining)
                    .lt(Expr::col(member_pack::Column::TotalCredits)),
            )
            .exec(conn)
            .await
            .map_err(db_err)?;
    }

    // A drained pack becomes reservable again; PAUSED stays paused.
    member_pack::Entity::update_many()
        .col_expr(
            member_pack::Column::Status,
            Expr::value(PackStatus::Active.as_str()),
        )
        .filter(member_pack::Column::Id.eq(pack_id))
        .filter(member_pack::Column::Status.eq(PackStatus::Used.as_str()))
        .exec(conn)
        .await
        .map_err(db_err)?;

    fetch_pack(conn, pack_id).await.map(model_to_domain)
}

// ── PackRepository impl ─────────────────────────────────────────

#[async_trait]
impl PackRepository for SeaOrmPackRepository {
    async fn save(&self, pack: MemberPack) -> DomainResult<()> {
        debug!("Saving member pack: {}", pack.id);

        let model = member_pack::ActiveModel {
            id: Set(pack.id),
            client_id: Set(pack.client_id),
            total_credits: Set(pack.total_credits),
            credits_remaining: Set(pack.credits_remaining),
            status: Set(pack.status.as_str().to_string()),
            activated_at: Set(pack.activated_at),
            created_at: Set(pack.created_at),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<MemberPack>> {
        let model = member_pack::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self, client_id: Option<&str>) -> DomainResult<Vec<MemberPack>> {
        let mut query = member_pack::Entity::find();
        if let Some(client_id) = client_id {
            query = query.filter(member_pack::Column::ClientId.eq(client_id));
        }
        let models = query
            .order_by_desc(member_pack::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn reserve_credit(&self, pack_id: Uuid) -> DomainResult<MemberPack> {
        reserve_credit_on(&self.db, pack_id).await
    }

    async fn release_credit(&self, pack_id: Uuid) -> DomainResult<MemberPack> {
        release_credit_on(&self.db, pack_id).await
    }

    async fn update_status(&self, pack_id: Uuid, status: PackStatus) -> DomainResult<()> {
        let res = member_pack::Entity::update_many()
            .col_expr(member_pack::Column::Status, Expr::value(status.as_str()))
            .filter(member_pack::Column::Id.eq(pack_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if res.rows_affected == 0 {
            return Err(DomainError::not_found("MemberPack", "id", pack_id));
        }
        Ok(())
    }
}
