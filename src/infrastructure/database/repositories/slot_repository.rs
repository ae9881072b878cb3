//! SeaORM implementation of SlotRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::debug;
use uuid::Uuid;

use crate::domain::slot::{AvailabilitySlot, SlotRepository, SlotSource};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::availability_slot;

use super::db_err;

pub struct SeaOrmSlotRepository {
    db: DatabaseConnection,
}

impl SeaOrmSlotRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: availability_slot::Model) -> AvailabilitySlot {
    AvailabilitySlot {
        id: m.id,
        start_at: m.start_at,
        end_at: m.end_at,
        source: SlotSource::from_str(&m.source),
        created_at: m.created_at,
    }
}

// ── SlotRepository impl ─────────────────────────────────────────

#[async_trait]
impl SlotRepository for SeaOrmSlotRepository {
    async fn insert_if_absent(&self, slot: AvailabilitySlot) -> DomainResult<bool> {
        debug!("Inserting slot {} - {}", slot.start_at, slot.end_at);

        let model = availability_slot::ActiveModel {
            id: Set(slot.id),
            start_at: Set(slot.start_at),
            end_at: Set(slot.end_at),
            source: Set(slot.source.as_str().to_string()),
            created_at: Set(slot.created_at),
        };

        // The unique index on (start_at, end_at) makes re-expansion
        // idempotent even when two apply runs race.
        let inserted = availability_slot::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    availability_slot::Column::StartAt,
                    availability_slot::Column::EndAt,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;

        Ok(inserted > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<AvailabilitySlot>> {
        let model = availability_slot::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_in_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<AvailabilitySlot>> {
        let models = availability_slot::Entity::find()
            .filter(availability_slot::Column::StartAt.lt(to))
            .filter(availability_slot::Column::EndAt.gt(from))
            .order_by_asc(availability_slot::Column::StartAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_all(&self) -> DomainResult<Vec<AvailabilitySlot>> {
        let models = availability_slot::Entity::find()
            .order_by_asc(availability_slot::Column::StartAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let res = availability_slot::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if res.rows_affected == 0 {
            return Err(DomainError::not_found("AvailabilitySlot", "id", id));
        }
        Ok(())
    }
}
