use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::track_dto::{CreateTrackRequest, TrackResponse, UpdateTrackRequest};
use crate::repositories::track_repository::TrackRepository;
use crate::utils::errors::AppError;

pub struct TrackController {
    repository: TrackRepository,
}

impl TrackController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TrackRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateTrackRequest,
    ) -> Result<ApiResponse<TrackResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let track = self
            .repository
            .create(
                request.title,
                request.artist,
                request.file_url,
                request.active.unwrap_or(true),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            track.into(),
            "Pista creada exitosamente".to_string(),
        ))
    }

    /// Listado público: las pistas que reproduce el sitio
    pub async fn list_active(&self) -> Result<Vec<TrackResponse>, AppError> {
        let tracks = self.repository.find_active().await?;
        Ok(tracks.into_iter().map(Into::into).collect())
    }

    pub async fn list_all(&self) -> Result<Vec<TrackResponse>, AppError> {
        let tracks = self.repository.find_all().await?;
        Ok(tracks.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateTrackRequest,
    ) -> Result<ApiResponse<TrackResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let track = self
            .repository
            .update(id, request.title, request.artist, request.file_url, request.active)
            .await?;

        Ok(ApiResponse::success_with_message(
            track.into(),
            "Pista actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
