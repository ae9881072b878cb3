//! Availability slot DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::carver::TimeRange;
use crate::domain::slot::AvailabilitySlot;

/// Request to create a one-off slot outside the weekly rules
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSlotRequest {
    /// Window start (RFC 3339, UTC)
    #[schema(value_type = String, format = DateTime)]
    pub start_at: DateTime<Utc>,
    /// Window end (RFC 3339, UTC)
    #[schema(value_type = String, format = DateTime)]
    pub end_at: DateTime<Utc>,
}

/// Slot details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct SlotDto {
    pub id: String,
    pub start_at: String,
    pub end_at: String,
    /// "EXPANDED" for rule-generated slots, "MANUAL" for one-offs
    pub source: String,
    pub created_at: String,
}

impl From<AvailabilitySlot> for SlotDto {
    fn from(s: AvailabilitySlot) -> Self {
        Self {
            id: s.id.to_string(),
            start_at: s.start_at.to_rfc3339(),
            end_at: s.end_at.to_rfc3339(),
            source: s.source.as_str().to_string(),
            created_at: s.created_at.to_rfc3339(),
        }
    }
}

/// Query parameters for the open-units listing
#[derive(Debug, Deserialize, ToSchema)]
pub struct OpenUnitsQuery {
    /// Forward horizon in days
    #[serde(default = "default_range_days")]
    pub range_days: u32,
}

fn default_range_days() -> u32 {
    14
}

/// A bookable unit in the open-units listing
#[derive(Debug, Serialize, ToSchema)]
pub struct OpenUnitDto {
    pub start_at: String,
    pub end_at: String,
}

impl From<TimeRange> for OpenUnitDto {
    fn from(r: TimeRange) -> Self {
        Self {
            start_at: r.start_at.to_rfc3339(),
            end_at: r.end_at.to_rfc3339(),
        }
    }
}
