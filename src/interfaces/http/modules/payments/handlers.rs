//! Payment HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::application::PaymentService;
use crate::domain::payment::PaymentMethod;
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for payment handlers.
#[derive(Clone)]
pub struct PaymentAppState {
    pub payments: Arc<PaymentService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/payments",
    tag = "Payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 200, description = "Payment recorded as PENDING", body = ApiResponse<PaymentDto>),
        (status = 400, description = "Invalid amount"),
        (status = 404, description = "Linked booking not found"),
        (status = 409, description = "Booking already has a payment")
    )
)]
pub async fn create_payment(
    State(state): State<PaymentAppState>,
    ValidatedJson(request): ValidatedJson<CreatePaymentRequest>,
) -> Result<Json<ApiResponse<PaymentDto>>, (StatusCode, Json<ApiResponse<PaymentDto>>)> {
    let method = PaymentMethod::from_str(&request.method);
    let payment = state
        .payments
        .create_payment(
            request.amount_cents,
            &request.currency,
            method,
            request.booking_id,
        )
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(payment.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/payments/{payment_id}",
    tag = "Payments",
    params(("payment_id" = Uuid, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment details", body = ApiResponse<PaymentDto>),
        (status = 404, description = "Payment not found")
    )
)]
pub async fn get_payment(
    State(state): State<PaymentAppState>,
    Path(payment_id): Path<Uuid>,
) -> Result<Json<ApiResponse<PaymentDto>>, (StatusCode, Json<ApiResponse<PaymentDto>>)> {
    let payment = state
        .payments
        .get_payment(payment_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(payment.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/payments/{payment_id}/paid",
    tag = "Payments",
    params(("payment_id" = Uuid, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment marked PAID", body = ApiResponse<PaymentDto>),
        (status = 404, description = "Payment not found"),
        (status = 409, description = "Transition not allowed")
    )
)]
pub async fn mark_paid(
    State(state): State<PaymentAppState>,
    Path(payment_id): Path<Uuid>,
) -> Result<Json<ApiResponse<PaymentDto>>, (StatusCode, Json<ApiResponse<PaymentDto>>)> {
    let payment = state
        .payments
        .mark_paid(payment_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(payment.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/payments/{payment_id}/failed",
    tag = "Payments",
    params(("payment_id" = Uuid, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment marked FAILED", body = ApiResponse<PaymentDto>),
        (status = 404, description = "Payment not found"),
        (status = 409, description = "Transition not allowed")
    )
)]
pub async fn mark_failed(
    State(state): State<PaymentAppState>,
    Path(payment_id): Path<Uuid>,
) -> Result<Json<ApiResponse<PaymentDto>>, (StatusCode, Json<ApiResponse<PaymentDto>>)> {
    let payment = state
        .payments
        .mark_failed(payment_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(payment.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/payments/{payment_id}/refunded",
    tag = "Payments",
    params(("payment_id" = Uuid, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment marked REFUNDED", body = ApiResponse<PaymentDto>),
        (status = 404, description = "Payment not found"),
        (status = 409, description = "Transition not allowed")
    )
)]
pub async fn mark_refunded(
    State(state): State<PaymentAppState>,
    Path(payment_id): Path<Uuid>,
) -> Result<Json<ApiResponse<PaymentDto>>, (StatusCode, Json<ApiResponse<PaymentDto>>)> {
    let payment = state
        .payments
        .mark_refunded(payment_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(payment.into())))
}
