use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::track_controller::TrackController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::track_dto::{CreateTrackRequest, TrackResponse, UpdateTrackRequest};
use crate::middleware::auth_middleware::require_admin;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_track_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_track))
        .route("/all", get(list_all_tracks))
        .route("/:id", put(update_track))
        .route("/:id", delete(delete_track))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new().route("/", get(list_active_tracks)).merge(admin)
}

async fn list_active_tracks(
    State(state): State<AppState>,
) -> Result<Json<Vec<TrackResponse>>, AppError> {
    let controller = TrackController::new(state.pool.clone());
    let response = controller.list_active().await?;
    Ok(Json(response))
}

async fn list_all_tracks(
    State(state): State<AppState>,
) -> Result<Json<Vec<TrackResponse>>, AppError> {
    let controller = TrackController::new(state.pool.clone());
    let response = controller.list_all().await?;
    Ok(Json(response))
}

async fn create_track(
    State(state): State<AppState>,
    Json(request): Json<CreateTrackRequest>,
) -> Result<Json<ApiResponse<TrackResponse>>, AppError> {
    let controller = TrackController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_track(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTrackRequest>,
) -> Result<Json<ApiResponse<TrackResponse>>, AppError> {
    let controller = TrackController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_track(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TrackController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Pista eliminada exitosamente"
    })))
}
