//! Member pack HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::application::PackService;
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for pack handlers.
#[derive(Clone)]
pub struct PackAppState {
    pub packs: Arc<PackService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/packs",
    tag = "Packs",
    request_body = CreatePackRequest,
    responses(
        (status = 200, description = "Pack created", body = ApiResponse<PackDto>),
        (status = 400, description = "Invalid pack size")
    )
)]
pub async fn create_pack(
    State(state): State<PackAppState>,
    ValidatedJson(request): ValidatedJson<CreatePackRequest>,
) -> Result<Json<ApiResponse<PackDto>>, (StatusCode, Json<ApiResponse<PackDto>>)> {
    let pack = state
        .packs
        .create_pack(&request.client_id, request.total_credits)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(pack.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/packs",
    tag = "Packs",
    params(("client_id" = Option<String>, Query, description = "Restrict to one client")),
    responses(
        (status = 200, description = "Packs", body = ApiResponse<Vec<PackDto>>)
    )
)]
pub async fn list_packs(
    State(state): State<PackAppState>,
    Query(query): Query<ListPacksQuery>,
) -> Result<Json<ApiResponse<Vec<PackDto>>>, (StatusCode, Json<ApiResponse<Vec<PackDto>>>)> {
    let packs = state
        .packs
        .list_packs(query.client_id.as_deref())
        .await
        .map_err(error_response)?;

    let dtos: Vec<PackDto> = packs.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/v1/packs/{pack_id}",
    tag = "Packs",
    params(("pack_id" = Uuid, Path, description = "Pack ID")),
    responses(
        (status = 200, description = "Pack details", body = ApiResponse<PackDto>),
        (status = 404, description = "Pack not found")
    )
)]
pub async fn get_pack(
    State(state): State<PackAppState>,
    Path(pack_id): Path<Uuid>,
) -> Result<Json<ApiResponse<PackDto>>, (StatusCode, Json<ApiResponse<PackDto>>)> {
    let pack = state.packs.get_pack(pack_id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(pack.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/packs/{pack_id}/pause",
    tag = "Packs",
    params(("pack_id" = Uuid, Path, description = "Pack ID")),
    responses(
        (status = 200, description = "Pack paused", body = ApiResponse<PackDto>),
        (status = 404, description = "Pack not found"),
        (status = 409, description = "Pack is not active")
    )
)]
pub async fn pause_pack(
    State(state): State<PackAppState>,
    Path(pack_id): Path<Uuid>,
) -> Result<Json<ApiResponse<PackDto>>, (StatusCode, Json<ApiResponse<PackDto>>)> {
    let pack = state.packs.pause_pack(pack_id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(pack.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/packs/{pack_id}/resume",
    tag = "Packs",
    params(("pack_id" = Uuid, Path, description = "Pack ID")),
    responses(
        (status = 200, description = "Pack resumed", body = ApiResponse<PackDto>),
        (status = 404, description = "Pack not found"),
        (status = 409, description = "Pack is not paused")
    )
)]
pub async fn resume_pack(
    State(state): State<PackAppState>,
    Path(pack_id): Path<Uuid>,
) -> Result<Json<ApiResponse<PackDto>>, (StatusCode, Json<ApiResponse<PackDto>>)> {
    let pack = state.packs.resume_pack(pack_id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(pack.into())))
}
