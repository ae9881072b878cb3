//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_availability_rules;
mod m20260101_000002_create_availability_slots;
mod m20260101_000003_create_member_packs;
mod m20260101_000004_create_bookings;
mod m20260101_000005_create_payments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_availability_rules::Migration),
            Box::new(m20260101_000002_create_availability_slots::Migration),
            Box::new(m20260101_000003_create_member_packs::Migration),
            Box::new(m20260101_000004_create_bookings::Migration),
            Box::new(m20260101_000005_create_payments::Migration),
        ]
    }
}
