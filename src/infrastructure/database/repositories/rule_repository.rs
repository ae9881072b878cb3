//! SeaORM implementation of RuleRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::debug;
use uuid::Uuid;

use crate::domain::rule::{AvailabilityRule, RuleRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::availability_rule;

use super::db_err;

pub struct SeaOrmRuleRepository {
    db: DatabaseConnection,
}

impl SeaOrmRuleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: availability_rule::Model) -> AvailabilityRule {
    AvailabilityRule {
        id: m.id,
        weekday: u8::try_from(m.weekday).unwrap_or(u8::MAX),
        start_minutes: u16::try_from(m.start_minutes).unwrap_or(0),
        end_minutes: u16::try_from(m.end_minutes).unwrap_or(0),
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(r: AvailabilityRule) -> availability_rule::ActiveModel {
    availability_rule::ActiveModel {
        id: Set(r.id),
        weekday: Set(i32::from(r.weekday)),
        start_minutes: Set(i32::from(r.start_minutes)),
        end_minutes: Set(i32::from(r.end_minutes)),
        created_at: Set(r.created_at),
        updated_at: Set(r.updated_at),
    }
}

// ── RuleRepository impl ─────────────────────────────────────────

#[async_trait]
impl RuleRepository for SeaOrmRuleRepository {
    async fn save(&self, rule: AvailabilityRule) -> DomainResult<()> {
        debug!("Saving availability rule: {}", rule.id);
        domain_to_active(rule).insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<AvailabilityRule>> {
        let model = availability_rule::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<AvailabilityRule>> {
        let models = availability_rule::Entity::find()
            .order_by_asc(availability_rule::Column::Weekday)
            .order_by_asc(availability_rule::Column::StartMinutes)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, rule: AvailabilityRule) -> DomainResult<()> {
        debug!("Updating availability rule: {}", rule.id);

        let existing = availability_rule::Entity::find_by_id(rule.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::not_found("AvailabilityRule", "id", rule.id));
        }

        domain_to_active(rule).update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let res = availability_rule::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if res.rows_affected == 0 {
            return Err(DomainError::not_found("AvailabilityRule", "id", id));
        }
        Ok(())
    }
}
