use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    AvailabilityQuery, AvailabilityResponse, CreateVehicleRequest, UpdateVehicleRequest,
    UpdateVehicleStatusRequest, VehicleFilters, VehicleResponse,
};
use crate::middleware::auth_middleware::require_admin;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route("/:id/status", put(update_vehicle_status))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id/availability", get(check_availability))
        .merge(admin)
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn check_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller
        .check_availability(id, query.start, query.end)
        .await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn update_vehicle_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleStatusRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}
