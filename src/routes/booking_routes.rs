use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::booking_dto::{
    BookingRequest, BookingResponse, CreateReservationRequest, ReservationResponse,
};
use crate::middleware::auth_middleware::require_admin;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas públicas de solicitud de reserva
pub fn create_booking_router() -> Router<AppState> {
    Router::new().route("/request", post(request_booking))
}

/// Rutas administrativas de reservas registradas
pub fn create_reservation_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(record_reservation))
        .route("/vehicle/:vehicle_id", get(list_vehicle_reservations))
        .route("/:id", delete(delete_reservation))
        .route_layer(middleware::from_fn_with_state(state, require_admin))
}

async fn request_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller
        .request_booking(request, state.notifier.as_ref())
        .await?;
    Ok(Json(response))
}

async fn record_reservation(
    State(state): State<AppState>,
    Json(request): Json<CreateReservationRequest>,
) -> Result<Json<ApiResponse<ReservationResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.record_reservation(request).await?;
    Ok(Json(response))
}

async fn list_vehicle_reservations(
    State(state): State<AppState>,
    Path(vehicle_id): Path<Uuid>,
) -> Result<Json<Vec<ReservationResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list_for_vehicle(vehicle_id).await?;
    Ok(Json(response))
}

async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    controller.delete_reservation(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Reserva eliminada exitosamente"
    })))
}
