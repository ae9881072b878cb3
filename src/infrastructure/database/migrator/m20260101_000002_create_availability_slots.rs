//! Create availability_slots table
//!
//! Concrete open windows. The unique index on `(start_at, end_at)` is the
//! storage-level dedupe that keeps rule expansion idempotent even across
//! concurrent runs.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AvailabilitySlots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AvailabilitySlots::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AvailabilitySlots::StartAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AvailabilitySlots::EndAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AvailabilitySlots::Source)
                            .string()
                            .not_null()
                            .default("EXPANDED"),
                    )
                    .col(
                        ColumnDef::new(AvailabilitySlots::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_availability_slots_window")
                    .table(AvailabilitySlots::Table)
                    .col(AvailabilitySlots::StartAt)
                    .col(AvailabilitySlots::EndAt)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_availability_slots_start")
                    .table(AvailabilitySlots::Table)
                    .col(AvailabilitySlots::StartAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AvailabilitySlots::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum AvailabilitySlots {
    Table,
    Id,
    StartAt,
    EndAt,
    Source,
    CreatedAt,
}
