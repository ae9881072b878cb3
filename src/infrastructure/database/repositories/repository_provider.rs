//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::booking::BookingRepository;
use crate::domain::pack::PackRepository;
use crate::domain::payment::PaymentRepository;
use crate::domain::rule::RuleRepository;
use crate::domain::slot::SlotRepository;
use crate::domain::RepositoryProvider;

use super::booking_repository::SeaOrmBookingRepository;
use super::pack_repository::SeaOrmPackRepository;
use super::payment_repository::SeaOrmPaymentRepository;
use super::rule_repository::SeaOrmRuleRepository;
use super::slot_repository::SeaOrmSlotRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    rules: SeaOrmRuleRepository,
    slots: SeaOrmSlotRepository,
    packs: SeaOrmPackRepository,
    bookings: SeaOrmBookingRepository,
    payments: SeaOrmPaymentRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            rules: SeaOrmRuleRepository::new(db.clone()),
            slots: SeaOrmSlotRepository::new(db.clone()),
            packs: SeaOrmPackRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            payments: SeaOrmPaymentRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn rules(&self) -> &dyn RuleRepository {
        &self.rules
    }

    fn slots(&self) -> &dyn SlotRepository {
        &self.slots
    }

    fn packs(&self) -> &dyn PackRepository {
        &self.packs
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn payments(&self) -> &dyn PaymentRepository {
        &self.payments
    }
}
