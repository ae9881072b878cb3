//! Create availability_rules table
//!
//! Recurring weekly windows (weekday + minutes-of-day range) owned by the
//! provider. Expanded into concrete slots by `apply_rules`.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AvailabilityRules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AvailabilityRules::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AvailabilityRules::Weekday)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AvailabilityRules::StartMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AvailabilityRules::EndMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AvailabilityRules::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AvailabilityRules::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_availability_rules_weekday")
                    .table(AvailabilityRules::Table)
                    .col(AvailabilityRules::Weekday)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AvailabilityRules::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum AvailabilityRules {
    Table,
    Id,
    Weekday,
    StartMinutes,
    EndMinutes,
    CreatedAt,
    UpdatedAt,
}
