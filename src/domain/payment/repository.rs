//! Repository interface for payments

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::DomainResult;

use super::{Payment, PaymentStatus};

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn save(&self, payment: Payment) -> DomainResult<()>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Payment>>;
    async fn find_by_booking(&self, booking_id: Uuid) -> DomainResult<Option<Payment>>;
    async fn update_status(&self, id: Uuid, status: PaymentStatus) -> DomainResult<()>;
}
