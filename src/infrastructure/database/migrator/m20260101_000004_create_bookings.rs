//! Create bookings table
//!
//! One row per client claim on a carved unit. Never hard-deleted; REFUSED
//! is the cancellation terminal state.

use sea_orm_migration::prelude::*;

use super::m20260101_000003_create_member_packs::MemberPacks;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::ClientId).string().not_null())
                    .col(ColumnDef::new(Bookings::PackId).uuid().not_null())
                    .col(
                        ColumnDef::new(Bookings::StartAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::EndAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .string()
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(ColumnDef::new(Bookings::MemberNotes).string())
                    .col(ColumnDef::new(Bookings::CoachNotes).string())
                    .col(ColumnDef::new(Bookings::ConfirmedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Bookings::CancelledAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Bookings::PaymentId).uuid())
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_member_pack")
                            .from(Bookings::Table, Bookings::PackId)
                            .to(MemberPacks::Table, MemberPacks::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_status")
                    .table(Bookings::Table)
                    .col(Bookings::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_start")
                    .table(Bookings::Table)
                    .col(Bookings::StartAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_pack")
                    .table(Bookings::Table)
                    .col(Bookings::PackId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Bookings {
    Table,
    Id,
    ClientId,
    PackId,
    StartAt,
    EndAt,
    Status,
    MemberNotes,
    CoachNotes,
    ConfirmedAt,
    CancelledAt,
    PaymentId,
    CreatedAt,
}
