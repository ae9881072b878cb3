//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    routing::{get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{AvailabilityService, BookingService, PackService, PaymentService};
use crate::interfaces::http::common::{ApiResponse, EmptyData};
use crate::interfaces::http::modules::{bookings, health, packs, payments, rules, slots};

/// Unified state for all booking-engine routes. Axum extracts the
/// specific handler state via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub availability: Arc<AvailabilityService>,
    pub bookings: Arc<BookingService>,
    pub packs: Arc<PackService>,
    pub payments: Arc<PaymentService>,
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<AppState> for rules::RuleAppState {
    fn from_ref(s: &AppState) -> Self {
        rules::RuleAppState {
            availability: Arc::clone(&s.availability),
        }
    }
}

impl FromRef<AppState> for slots::SlotAppState {
    fn from_ref(s: &AppState) -> Self {
        slots::SlotAppState {
            availability: Arc::clone(&s.availability),
        }
    }
}

impl FromRef<AppState> for packs::PackAppState {
    fn from_ref(s: &AppState) -> Self {
        packs::PackAppState {
            packs: Arc::clone(&s.packs),
        }
    }
}

impl FromRef<AppState> for bookings::BookingAppState {
    fn from_ref(s: &AppState) -> Self {
        bookings::BookingAppState {
            bookings: Arc::clone(&s.bookings),
        }
    }
}

impl FromRef<AppState> for payments::PaymentAppState {
    fn from_ref(s: &AppState) -> Self {
        payments::PaymentAppState {
            payments: Arc::clone(&s.payments),
        }
    }
}

impl FromRef<AppState> for health::HealthState {
    fn from_ref(s: &AppState) -> Self {
        health::HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Rules
        rules::create_rule,
        rules::list_rules,
        rules::update_rule,
        rules::delete_rule,
        rules::apply_rules,
        // Slots
        slots::create_slot,
        slots::list_slots,
        slots::list_open_units,
        slots::delete_slot,
        // Packs
        packs::create_pack,
        packs::list_packs,
        packs::get_pack,
        packs::pause_pack,
        packs::resume_pack,
        // Bookings
        bookings::create_booking,
        bookings::list_bookings,
        bookings::get_booking,
        bookings::confirm_booking,
        bookings::refuse_booking,
        // Payments
        payments::create_payment,
        payments::get_payment,
        payments::mark_paid,
        payments::mark_failed,
        payments::mark_refunded,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            EmptyData,
            // Rules
            rules::RuleRequest,
            rules::RuleDto,
            rules::ApplyRulesRequest,
            rules::ApplyRulesResponse,
            // Slots
            slots::CreateSlotRequest,
            slots::SlotDto,
            slots::OpenUnitDto,
            // Packs
            packs::CreatePackRequest,
            packs::PackDto,
            // Bookings
            bookings::CreateBookingRequest,
            bookings::RefuseBookingRequest,
            bookings::BookingDto,
            // Payments
            payments::CreatePaymentRequest,
            payments::PaymentDto,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Rules", description = "Weekly availability rules and expansion into concrete slots"),
        (name = "Slots", description = "Concrete availability windows and bookable units"),
        (name = "Packs", description = "Prepaid credit packs"),
        (name = "Bookings", description = "Booking lifecycle: PENDING, CONFIRMED, REFUSED"),
        (name = "Payments", description = "Local payment tracker for gateway and cash payments"),
    ),
    info(
        title = "Studio Booking API",
        version = "0.1.0",
        description = "REST API for availability, credit packs, bookings and payments",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let rule_routes = Router::new()
        .route("/", get(rules::list_rules).post(rules::create_rule))
        .route("/apply", post(rules::apply_rules))
        .route(
            "/{rule_id}",
            put(rules::update_rule).delete(rules::delete_rule),
        );

    let slot_routes = Router::new()
        .route("/", get(slots::list_slots).post(slots::create_slot))
        .route("/open", get(slots::list_open_units))
        .route("/{slot_id}", axum::routing::delete(slots::delete_slot));

    let pack_routes = Router::new()
        .route("/", get(packs::list_packs).post(packs::create_pack))
        .route("/{pack_id}", get(packs::get_pack))
        .route("/{pack_id}/pause", post(packs::pause_pack))
        .route("/{pack_id}/resume", post(packs::resume_pack));

    let booking_routes = Router::new()
        .route(
            "/",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/{booking_id}", get(bookings::get_booking))
        .route("/{booking_id}/confirm", post(bookings::confirm_booking))
        .route("/{booking_id}/refuse", post(bookings::refuse_booking));

    let payment_routes = Router::new()
        .route("/", post(payments::create_payment))
        .route("/{payment_id}", get(payments::get_payment))
        .route("/{payment_id}/paid", post(payments::mark_paid))
        .route("/{payment_id}/failed", post(payments::mark_failed))
        .route("/{payment_id}/refunded", post(payments::mark_refunded));

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        // Resources
        .nest("/api/v1/rules", rule_routes)
        .nest("/api/v1/slots", slot_routes)
        .nest("/api/v1/packs", pack_routes)
        .nest("/api/v1/bookings", booking_routes)
        .nest("/api/v1/payments", payment_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
