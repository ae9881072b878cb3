//! Availability slot HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::application::AvailabilityService;
use crate::interfaces::http::common::{error_response, ApiResponse, EmptyData, ValidatedJson};

use super::dto::*;

/// Application state for slot handlers.
#[derive(Clone)]
pub struct SlotAppState {
    pub availability: Arc<AvailabilityService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/slots",
    tag = "Slots",
    request_body = CreateSlotRequest,
    responses(
        (status = 200, description = "Slot created", body = ApiResponse<SlotDto>),
        (status = 400, description = "Invalid window"),
        (status = 409, description = "Identical slot already exists")
    )
)]
pub async fn create_slot(
    State(state): State<SlotAppState>,
    ValidatedJson(request): ValidatedJson<CreateSlotRequest>,
) -> Result<Json<ApiResponse<SlotDto>>, (StatusCode, Json<ApiResponse<SlotDto>>)> {
    let slot = state
        .availability
        .create_slot(request.start_at, request.end_at)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(slot.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/slots",
    tag = "Slots",
    responses(
        (status = 200, description = "All concrete slots", body = ApiResponse<Vec<SlotDto>>)
    )
)]
pub async fn list_slots(
    State(state): State<SlotAppState>,
) -> Result<Json<ApiResponse<Vec<SlotDto>>>, (StatusCode, Json<ApiResponse<Vec<SlotDto>>>)> {
    let slots = state.availability.list_slots().await.map_err(error_response)?;
    let dtos: Vec<SlotDto> = slots.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/v1/slots/open",
    tag = "Slots",
    params(("range_days" = Option<u32>, Query, description = "Forward horizon in days (default 14)")),
    responses(
        (status = 200, description = "Bookable units", body = ApiResponse<Vec<OpenUnitDto>>)
    )
)]
pub async fn list_open_units(
    State(state): State<SlotAppState>,
    Query(query): Query<OpenUnitsQuery>,
) -> Result<
    Json<ApiResponse<Vec<OpenUnitDto>>>,
    (StatusCode, Json<ApiResponse<Vec<OpenUnitDto>>>),
> {
    let units = state
        .availability
        .list_open_units(query.range_days)
        .await
        .map_err(error_response)?;

    let dtos: Vec<OpenUnitDto> = units.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/slots/{slot_id}",
    tag = "Slots",
    params(("slot_id" = Uuid, Path, description = "Slot ID")),
    responses(
        (status = 200, description = "Slot deleted", body = ApiResponse<EmptyData>)
    )
)]
pub async fn delete_slot(
    State(state): State<SlotAppState>,
    Path(slot_id): Path<Uuid>,
) -> Result<Json<ApiResponse<EmptyData>>, (StatusCode, Json<ApiResponse<EmptyData>>)> {
    state
        .availability
        .delete_slot(slot_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(EmptyData {})))
}
