//! Booking DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::booking::Booking;

/// Request to book one open unit against a credit pack
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    /// Client making the booking
    #[validate(length(min = 1, max = 128))]
    pub client_id: String,
    /// Pack the credit is reserved from
    pub pack_id: uuid::Uuid,
    /// Unit start (RFC 3339, UTC)
    #[schema(value_type = String, format = DateTime)]
    pub start_at: DateTime<Utc>,
    /// Unit end (RFC 3339, UTC)
    #[schema(value_type = String, format = DateTime)]
    pub end_at: DateTime<Utc>,
    /// Free-text note from the member
    #[validate(length(max = 2000))]
    pub member_notes: Option<String>,
}

/// Request to refuse a pending booking
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RefuseBookingRequest {
    /// Reason shown to the member
    #[validate(length(max = 2000))]
    pub coach_notes: Option<String>,
}

/// Query parameters for the booking listing
#[derive(Debug, Deserialize, ToSchema)]
pub struct ListBookingsQuery {
    /// Filter by status (PENDING, CONFIRMED or REFUSED)
    pub status: Option<String>,
    /// Filter by pack
    pub pack_id: Option<uuid::Uuid>,
}

/// Booking details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDto {
    pub id: String,
    pub client_id: String,
    pub pack_id: String,
    pub start_at: String,
    pub end_at: String,
    pub status: String,
    pub member_notes: Option<String>,
    pub coach_notes: Option<String>,
    pub confirmed_at: Option<String>,
    pub cancelled_at: Option<String>,
    pub payment_id: Option<String>,
    pub created_at: String,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id.to_string(),
            client_id: b.client_id,
            pack_id: b.pack_id.to_string(),
            start_at: b.start_at.to_rfc3339(),
            end_at: b.end_at.to_rfc3339(),
            status: b.status.as_str().to_string(),
            member_notes: b.member_notes,
            coach_notes: b.coach_notes,
            confirmed_at: b.confirmed_at.map(|t| t.to_rfc3339()),
            cancelled_at: b.cancelled_at.map(|t| t.to_rfc3339()),
            payment_id: b.payment_id.map(|id| id.to_string()),
            created_at: b.created_at.to_rfc3339(),
        }
    }
}
