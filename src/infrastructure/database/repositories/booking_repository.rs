//! SeaORM implementation of BookingRepository
//!
//! `create_pending` and `refuse` are single transactions. The insert is
//! guarded by a `NOT EXISTS (overlapping PENDING/CONFIRMED booking)` and
//! an `EXISTS (slot covering the range)` subquery, both evaluated by the
//! same statement that writes the row, so of two racing callers exactly
//! one inserts, and a slot deleted concurrently cannot strand a PENDING
//! booking inside an unpublished window. The loser sees zero rows
//! affected and gets `SlotUnavailable`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Condition, Expr, Query};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use crate::domain::booking::{Booking, BookingRepository, BookingStatus, NewBooking};
use crate::domain::carver::TimeRange;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{availability_slot, booking, payment};
use crate::infrastructure::database::repositories::pack_repository::release_credit_on;
use crate::infrastructure::database::repositories::pack_repository::reserve_credit_on;

use super::{db_err, txn_err};

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: booking::Model) -> Booking {
    Booking {
        id: m.id,
        client_id: m.client_id,
        pack_id: m.pack_id,
        start_at: m.start_at,
        end_at: m.end_at,
        status: BookingStatus::from_str(&m.status),
        member_notes: m.member_notes,
        coach_notes: m.coach_notes,
        confirmed_at: m.confirmed_at,
        cancelled_at: m.cancelled_at,
        payment_id: m.payment_id,
        created_at: m.created_at,
    }
}

async fn fetch_booking<C: ConnectionTrait>(conn: &C, id: Uuid) -> DomainResult<booking::Model> {
    booking::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(db_err)?
        .ok_or_else(|| DomainError::not_found("Booking", "id", id))
}

/// Insert a PENDING booking unless a blocking booking overlaps its range
/// or no published slot covers it. Returns `false` when a guard rejected
/// the insert.
async fn guarded_insert(txn: &DatabaseTransaction, new: &NewBooking, id: Uuid) -> DomainResult<bool> {
    let blocking_overlap = Query::select()
        .expr(Expr::val(1))
        .from(booking::Entity)
        .and_where(booking::Column::Status.is_in([
            BookingStatus::Pending.as_str(),
            BookingStatus::Confirmed.as_str(),
        ]))
        .and_where(booking::Column::StartAt.lt(new.end_at))
        .and_where(booking::Column::EndAt.gt(new.start_at))
        .to_owned();

    // Units are carved within a single slot, so one covering row suffices.
    let covering_slot = Query::select()
        .expr(Expr::val(1))
        .from(availability_slot::Entity)
        .and_where(availability_slot::Column::StartAt.lte(new.start_at))
        .and_where(availability_slot::Column::EndAt.gte(new.end_at))
        .to_owned();

    let mut insert = Query::insert();
    insert
        .into_table(booking::Entity)
        .columns([
            booking::Column::Id,
            booking::Column::ClientId,
            booking::Column::PackId,
            booking::Column::StartAt,
            booking::Column::EndAt,
            booking::Column::Status,
            booking::Column::MemberNotes,
            booking::Column::CreatedAt,
        ])
        .select_from(
            Query::select()
                .expr(Expr::val(id))
                .expr(Expr::val(new.client_id.clone()))
                .expr(Expr::val(new.pack_id))
                .expr(Expr::val(new.start_at))
                .expr(Expr::val(new.end_at))
                .expr(Expr::val(BookingStatus::Pending.as_str()))
                .expr(Expr::val(new.member_notes.clone()))
                .expr(Expr::val(Utc::now()))
                .and_where(Expr::exists(blocking_overlap).not())
                .and_where(Expr::exists(covering_slot))
                .to_owned(),
        )
        .map_err(|e| DomainError::Storage(format!("Database error: {}", e)))?;

    let stmt = txn.get_database_backend().build(&insert);
    let res = txn.execute(stmt).await.map_err(db_err)?;
    Ok(res.rows_affected() > 0)
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn create_pending(&self, new: NewBooking) -> DomainResult<Booking> {
        debug!(
            "Creating booking for {}: {} - {}",
            new.client_id, new.start_at, new.end_at
        );

        let id = Uuid::new_v4();
        self.db
            .transaction::<_, Booking, DomainError>(move |txn| {
                Box::pin(async move {
                    if !guarded_insert(txn, &new, id).await? {
                        // Another booking claimed an overlapping range first.
                        return Err(DomainError::SlotUnavailable);
                    }

                    // Debit the pack inside the same transaction: on
                    // InsufficientCredit the insert above rolls back and
                    // the slot stays open.
                    reserve_credit_on(txn, new.pack_id).await?;

                    fetch_booking(txn, id).await.map(model_to_domain)
                })
            })
            .await
            .map_err(txn_err)
    }

    async fn confirm(&self, id: Uuid) -> DomainResult<Booking> {
        let res = booking::Entity::update_many()
            .col_expr(
                booking::Column::Status,
                Expr::value(BookingStatus::Confirmed.as_str()),
            )
            .col_expr(booking::Column::ConfirmedAt, Expr::value(Utc::now()))
            .filter(booking::Column::Id.eq(id))
            .filter(booking::Column::Status.eq(BookingStatus::Pending.as_str()))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if res.rows_affected == 0 {
            let existing = fetch_booking(&self.db, id).await?;
            return Err(DomainError::InvalidTransition(format!(
                "booking {} is {}, only PENDING can be confirmed",
                id, existing.status
            )));
        }

        fetch_booking(&self.db, id).await.map(model_to_domain)
    }

    async fn refuse(&self, id: Uuid, coach_notes: Option<String>) -> DomainResult<Booking> {
        self.db
            .transaction::<_, Booking, DomainError>(move |txn| {
                Box::pin(async move {
                    let res = booking::Entity::update_many()
                        .col_expr(
                            booking::Column::Status,
                            Expr::value(BookingStatus::Refused.as_str()),
                        )
                        .col_expr(booking::Column::CancelledAt, Expr::value(Utc::now()))
                        .col_expr(booking::Column::CoachNotes, Expr::value(coach_notes.clone()))
                        .filter(booking::Column::Id.eq(id))
                        .filter(booking::Column::Status.eq(BookingStatus::Pending.as_str()))
                        .exec(txn)
                        .await
                        .map_err(db_err)?;

                    if res.rows_affected == 0 {
                        let existing = fetch_booking(txn, id).await?;
                        return Err(DomainError::InvalidTransition(format!(
                            "booking {} is {}, only PENDING can be refused",
                            id, existing.status
                        )));
                    }

                    let refused = fetch_booking(txn, id).await?;

                    // Refusal returns the credit and frees the range.
                    release_credit_on(txn, refused.pack_id).await?;

                    // A linked PAID payment becomes REFUNDED; the actual
                    // gateway refund request is the caller's concern.
                    let mut linked = Condition::any().add(payment::Column::BookingId.eq(id));
                    if let Some(payment_id) = refused.payment_id {
                        linked = linked.add(payment::Column::Id.eq(payment_id));
                    }
                    payment::Entity::update_many()
                        .col_expr(
                            payment::Column::Status,
                            Expr::value(crate::domain::PaymentStatus::Refunded.as_str()),
                        )
                        .col_expr(payment::Column::UpdatedAt, Expr::value(Utc::now()))
                        .filter(linked)
                        .filter(
                            payment::Column::Status
                                .eq(crate::domain::PaymentStatus::Paid.as_str()),
                        )
                        .exec(txn)
                        .await
                        .map_err(db_err)?;

                    Ok(model_to_domain(refused))
                })
            })
            .await
            .map_err(txn_err)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Booking>> {
        let model = booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(
        &self,
        status: Option<BookingStatus>,
        pack_id: Option<Uuid>,
    ) -> DomainResult<Vec<Booking>> {
        let mut query = booking::Entity::find();
        if let Some(status) = status {
            query = query.filter(booking::Column::Status.eq(status.as_str()));
        }
        if let Some(pack_id) = pack_id {
            query = query.filter(booking::Column::PackId.eq(pack_id));
        }
        let models = query
            .order_by_asc(booking::Column::StartAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_blocking_in_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<TimeRange>> {
        let models = booking::Entity::find()
            .filter(booking::Column::Status.is_in([
                BookingStatus::Pending.as_str(),
                BookingStatus::Confirmed.as_str(),
            ]))
            .filter(booking::Column::StartAt.lt(to))
            .filter(booking::Column::EndAt.gt(from))
            .order_by_asc(booking::Column::StartAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models
            .into_iter()
            .map(|m| TimeRange::new(m.start_at, m.end_at))
            .collect())
    }

    async fn attach_payment(&self, id: Uuid, payment_id: Uuid) -> DomainResult<()> {
        let res = booking::Entity::update_many()
            .col_expr(booking::Column::PaymentId, Expr::value(payment_id))
            .filter(booking::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if res.rows_affected == 0 {
            return Err(DomainError::not_found("Booking", "id", id));
        }
        Ok(())
    }
}
