//! Availability rule HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::application::AvailabilityService;
use crate::interfaces::http::common::{error_response, ApiResponse, EmptyData, ValidatedJson};

use super::dto::*;

/// Application state for rule handlers.
#[derive(Clone)]
pub struct RuleAppState {
    pub availability: Arc<AvailabilityService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/rules",
    tag = "Rules",
    request_body = RuleRequest,
    responses(
        (status = 200, description = "Rule created", body = ApiResponse<RuleDto>),
        (status = 400, description = "Invalid window")
    )
)]
pub async fn create_rule(
    State(state): State<RuleAppState>,
    ValidatedJson(request): ValidatedJson<RuleRequest>,
) -> Result<Json<ApiResponse<RuleDto>>, (StatusCode, Json<ApiResponse<RuleDto>>)> {
    let rule = state
        .availability
        .create_rule(request.weekday, request.start_minutes, request.end_minutes)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(rule.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/rules",
    tag = "Rules",
    responses(
        (status = 200, description = "All weekly rules", body = ApiResponse<Vec<RuleDto>>)
    )
)]
pub async fn list_rules(
    State(state): State<RuleAppState>,
) -> Result<Json<ApiResponse<Vec<RuleDto>>>, (StatusCode, Json<ApiResponse<Vec<RuleDto>>>)> {
    let rules = state.availability.list_rules().await.map_err(error_response)?;
    let dtos: Vec<RuleDto> = rules.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    put,
    path = "/api/v1/rules/{rule_id}",
    tag = "Rules",
    params(("rule_id" = Uuid, Path, description = "Rule ID")),
    request_body = RuleRequest,
    responses(
        (status = 200, description = "Rule updated", body = ApiResponse<RuleDto>),
        (status = 400, description = "Invalid window"),
        (status = 404, description = "Rule not found")
    )
)]
pub async fn update_rule(
    State(state): State<RuleAppState>,
    Path(rule_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<RuleRequest>,
) -> Result<Json<ApiResponse<RuleDto>>, (StatusCode, Json<ApiResponse<RuleDto>>)> {
    let rule = state
        .availability
        .update_rule(
            rule_id,
            request.weekday,
            request.start_minutes,
            request.end_minutes,
        )
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(rule.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/rules/{rule_id}",
    tag = "Rules",
    params(("rule_id" = Uuid, Path, description = "Rule ID")),
    responses(
        (status = 200, description = "Rule deleted", body = ApiResponse<EmptyData>)
    )
)]
pub async fn delete_rule(
    State(state): State<RuleAppState>,
    Path(rule_id): Path<Uuid>,
) -> Result<Json<ApiResponse<EmptyData>>, (StatusCode, Json<ApiResponse<EmptyData>>)> {
    state
        .availability
        .delete_rule(rule_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(EmptyData {})))
}

#[utoipa::path(
    post,
    path = "/api/v1/rules/apply",
    tag = "Rules",
    request_body = ApplyRulesRequest,
    responses(
        (status = 200, description = "Expansion result", body = ApiResponse<ApplyRulesResponse>)
    )
)]
pub async fn apply_rules(
    State(state): State<RuleAppState>,
    ValidatedJson(request): ValidatedJson<ApplyRulesRequest>,
) -> Result<
    Json<ApiResponse<ApplyRulesResponse>>,
    (StatusCode, Json<ApiResponse<ApplyRulesResponse>>),
> {
    let created_count = state
        .availability
        .apply_rules(request.days_ahead)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(ApplyRulesResponse {
        created_count,
    })))
}
