//! Booking entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub client_id: String,
    pub pack_id: Uuid,

    pub start_at: DateTimeUtc,
    pub end_at: DateTimeUtc,

    /// Booking status: PENDING, CONFIRMED, REFUSED
    pub status: String,

    #[sea_orm(nullable)]
    pub member_notes: Option<String>,

    #[sea_orm(nullable)]
    pub coach_notes: Option<String>,

    #[sea_orm(nullable)]
    pub confirmed_at: Option<DateTimeUtc>,

    #[sea_orm(nullable)]
    pub cancelled_at: Option<DateTimeUtc>,

    #[sea_orm(nullable)]
    pub payment_id: Option<Uuid>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member_pack::Entity",
        from = "Column::PackId",
        to = "super::member_pack::Column::Id"
    )]
    MemberPack,
}

impl Related<super::member_pack::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberPack.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
