use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::review_controller::ReviewController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::review_dto::{CreateReviewRequest, ReviewResponse};
use crate::middleware::auth_middleware::require_admin;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_review_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/pending", get(list_pending_reviews))
        .route("/:id/approve", put(approve_review))
        .route("/:id", delete(delete_review))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/", get(list_reviews))
        .route("/", post(create_review))
        .merge(admin)
}

async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.list_approved().await?;
    Ok(Json(response))
}

async fn create_review(
    State(state): State<AppState>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<Json<ApiResponse<ReviewResponse>>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_pending_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.list_pending().await?;
    Ok(Json(response))
}

async fn approve_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReviewResponse>>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.approve(id).await?;
    Ok(Json(response))
}

async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Opinión eliminada exitosamente"
    })))
}
