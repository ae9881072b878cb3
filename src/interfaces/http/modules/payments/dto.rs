//! Payment DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::payment::Payment;

/// Request to record a payment
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePaymentRequest {
    /// Amount in minor units (cents)
    #[validate(range(min = 1))]
    pub amount_cents: i64,
    /// ISO 4217 currency code
    #[validate(length(min = 3, max = 3))]
    pub currency: String,
    /// "EXTERNAL_GATEWAY" or "CASH"
    pub method: String,
    /// Booking this payment settles, if any
    pub booking_id: Option<uuid::Uuid>,
}

/// Payment details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentDto {
    pub id: String,
    pub booking_id: Option<String>,
    pub amount_cents: i64,
    pub currency: String,
    pub method: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Payment> for PaymentDto {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id.to_string(),
            booking_id: p.booking_id.map(|id| id.to_string()),
            amount_cents: p.amount_cents,
            currency: p.currency,
            method: p.method.as_str().to_string(),
            status: p.status.as_str().to_string(),
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}
