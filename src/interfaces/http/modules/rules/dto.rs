//! Availability rule DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create or update a weekly rule
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RuleRequest {
    /// Day of week, 0-6 with 0 = Sunday
    #[validate(range(max = 6))]
    pub weekday: u8,
    /// Window start, minutes since midnight
    #[validate(range(max = 1439))]
    pub start_minutes: u16,
    /// Window end, minutes since midnight (exclusive)
    #[validate(range(max = 1439))]
    pub end_minutes: u16,
}

/// Rule details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct RuleDto {
    pub id: String,
    pub weekday: u8,
    pub start_minutes: u16,
    pub end_minutes: u16,
    pub created_at: String,
    pub updated_at: String,
}

impl From<crate::domain::rule::AvailabilityRule> for RuleDto {
    fn from(r: crate::domain::rule::AvailabilityRule) -> Self {
        Self {
            id: r.id.to_string(),
            weekday: r.weekday,
            start_minutes: r.start_minutes,
            end_minutes: r.end_minutes,
            created_at: r.created_at.to_rfc3339(),
            updated_at: r.updated_at.to_rfc3339(),
        }
    }
}

/// Request to expand rules into concrete slots
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ApplyRulesRequest {
    /// Forward horizon in days
    #[serde(default = "default_days_ahead")]
    #[validate(range(min = 1, max = 365))]
    pub days_ahead: u32,
}

fn default_days_ahead() -> u32 {
    14
}

/// Result of a rule expansion run
#[derive(Debug, Serialize, ToSchema)]
pub struct ApplyRulesResponse {
    /// Number of new slots created (0 on an idempotent re-run)
    pub created_count: u64,
}
