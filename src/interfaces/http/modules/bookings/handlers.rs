//! Booking HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::application::BookingService;
use crate::domain::booking::BookingStatus;
use crate::domain::DomainError;
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for booking handlers.
#[derive(Clone)]
pub struct BookingAppState {
    pub bookings: Arc<BookingService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking created as PENDING", body = ApiResponse<BookingDto>),
        (status = 404, description = "Pack not found"),
        (status = 409, description = "Unit taken or no credit left")
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> Result<Json<ApiResponse<BookingDto>>, (StatusCode, Json<ApiResponse<BookingDto>>)> {
    let booking = state
        .bookings
        .create_booking(
            &request.client_id,
            request.start_at,
            request.end_at,
            request.pack_id,
            request.member_notes,
        )
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    params(
        ("status" = Option<String>, Query, description = "Filter by status"),
        ("pack_id" = Option<Uuid>, Query, description = "Filter by pack")
    ),
    responses(
        (status = 200, description = "Bookings", body = ApiResponse<Vec<BookingDto>>)
    )
)]
pub async fn list_bookings(
    State(state): State<BookingAppState>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<
    Json<ApiResponse<Vec<BookingDto>>>,
    (StatusCode, Json<ApiResponse<Vec<BookingDto>>>),
> {
    let status = match query.status.as_deref() {
        Some(s) => Some(BookingStatus::try_from_str(s).ok_or_else(|| {
            error_response(DomainError::Validation(format!(
                "unknown status filter: {}",
                s
            )))
        })?),
        None => None,
    };
    let bookings = state
        .bookings
        .list_bookings(status, query.pack_id)
        .await
        .map_err(error_response)?;

    let dtos: Vec<BookingDto> = bookings.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{booking_id}",
    tag = "Bookings",
    params(("booking_id" = Uuid, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<BookingDto>),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<BookingAppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingDto>>, (StatusCode, Json<ApiResponse<BookingDto>>)> {
    let booking = state
        .bookings
        .get_booking(booking_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings/{booking_id}/confirm",
    tag = "Bookings",
    params(("booking_id" = Uuid, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking confirmed", body = ApiResponse<BookingDto>),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Booking is not pending")
    )
)]
pub async fn confirm_booking(
    State(state): State<BookingAppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingDto>>, (StatusCode, Json<ApiResponse<BookingDto>>)> {
    let booking = state
        .bookings
        .confirm_booking(booking_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings/{booking_id}/refuse",
    tag = "Bookings",
    params(("booking_id" = Uuid, Path, description = "Booking ID")),
    request_body = RefuseBookingRequest,
    responses(
        (status = 200, description = "Booking refused, credit released", body = ApiResponse<BookingDto>),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Booking is not pending")
    )
)]
pub async fn refuse_booking(
    State(state): State<BookingAppState>,
    Path(booking_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<RefuseBookingRequest>,
) -> Result<Json<ApiResponse<BookingDto>>, (StatusCode, Json<ApiResponse<BookingDto>>)> {
    let booking = state
        .bookings
        .refuse_booking(booking_id, request.coach_notes)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(booking.into())))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{test_db, test_repos};
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    async fn app() -> Router {
        let state = BookingAppState {
            bookings: Arc::new(BookingService::new(
                test_repos(test_db().await),
                chrono::Duration::hours(1),
            )),
        };
        Router::new().route("/", get(list_bookings)).with_state(state)
    }

    async fn send(uri: &str) -> StatusCode {
        let response = app()
            .await
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn known_status_filter_is_accepted() {
        assert_eq!(send("/?status=CONFIRMED").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_status_filter_is_bad_request() {
        assert_eq!(send("/?status=CANCELLED").await, StatusCode::BAD_REQUEST);
    }
}
