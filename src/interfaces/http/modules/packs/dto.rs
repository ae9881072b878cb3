//! Member pack DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::pack::MemberPack;

/// Request to create a credit pack
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePackRequest {
    /// Client the pack belongs to
    #[validate(length(min = 1, max = 128))]
    pub client_id: String,
    /// Pack size in credits; omit for an unlimited pack
    #[validate(range(min = 1))]
    pub total_credits: Option<i32>,
}

/// Query parameters for the pack listing
#[derive(Debug, Deserialize, ToSchema)]
pub struct ListPacksQuery {
    /// Restrict to one client's packs
    pub client_id: Option<String>,
}

/// Pack details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct PackDto {
    pub id: String,
    pub client_id: String,
    /// `null` for unlimited packs
    pub total_credits: Option<i32>,
    pub credits_remaining: i32,
    pub status: String,
    pub activated_at: String,
    pub created_at: String,
}

impl From<MemberPack> for PackDto {
    fn from(p: MemberPack) -> Self {
        Self {
            id: p.id.to_string(),
            client_id: p.client_id,
            total_credits: p.total_credits,
            credits_remaining: p.credits_remaining,
            status: p.status.as_str().to_string(),
            activated_at: p.activated_at.to_rfc3339(),
            created_at: p.created_at.to_rfc3339(),
        }
    }
}
