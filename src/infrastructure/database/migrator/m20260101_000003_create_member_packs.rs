//! Create member_packs table
//!
//! Prepaid credit packs. `total_credits` NULL means unlimited. Credits are
//! only touched by the ledger's conditional updates.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberPacks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MemberPacks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MemberPacks::ClientId).string().not_null())
                    .col(ColumnDef::new(MemberPacks::TotalCredits).integer())
                    .col(
                        ColumnDef::new(MemberPacks::CreditsRemaining)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MemberPacks::Status)
                            .string()
                            .not_null()
                            .default("ACTIVE"),
                    )
                    .col(
                        ColumnDef::new(MemberPacks::ActivatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MemberPacks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_member_packs_client")
                    .table(MemberPacks::Table)
                    .col(MemberPacks::ClientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_member_packs_status")
                    .table(MemberPacks::Table)
                    .col(MemberPacks::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MemberPacks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum MemberPacks {
    Table,
    Id,
    ClientId,
    TotalCredits,
    CreditsRemaining,
    Status,
    ActivatedAt,
    CreatedAt,
}
