use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::review_dto::{CreateReviewRequest, ReviewResponse};
use crate::repositories::review_repository::ReviewRepository;
use crate::utils::errors::AppError;

pub struct ReviewController {
    repository: ReviewRepository,
}

impl ReviewController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ReviewRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateReviewRequest,
    ) -> Result<ApiResponse<ReviewResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let review = self
            .repository
            .create(request.author_name, request.rating, request.comment)
            .await?;

        Ok(ApiResponse::success_with_message(
            review.into(),
            "Opinión enviada, pendiente de moderación".to_string(),
        ))
    }

    /// Listado público: solo opiniones aprobadas
    pub async fn list_approved(&self) -> Result<Vec<ReviewResponse>, AppError> {
        let reviews = self.repository.find_approved().await?;
        Ok(reviews.into_iter().map(Into::into).collect())
    }

    pub async fn list_pending(&self) -> Result<Vec<ReviewResponse>, AppError> {
        let reviews = self.repository.find_pending().await?;
        Ok(reviews.into_iter().map(Into::into).collect())
    }

    pub async fn approve(&self, id: Uuid) -> Result<ApiResponse<ReviewResponse>, AppError> {
        let review = self.repository.approve(id).await?;
        Ok(ApiResponse::success_with_message(
            review.into(),
            "Opinión aprobada".to_string(),
        ))
    }

    /// El rechazo de moderación es un borrado
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
