use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Track;
use crate::utils::errors::AppError;

pub struct TrackRepository {
    pool: PgPool,
}

impl TrackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        title: String,
        artist: Option<String>,
        file_url: String,
        active: bool,
    ) -> Result<Track, AppError> {
        let id = Uuid::new_v4();

        let track = sqlx::query_as::<_, Track>(
            r#"
            INSERT INTO tracks (id, title, artist, file_url, active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(artist)
        .bind(file_url)
        .bind(active)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating track: {}", e)))?;

        Ok(track)
    }

    pub async fn find_active(&self) -> Result<Vec<Track>, AppError> {
        let tracks = sqlx::query_as::<_, Track>(
            "SELECT * FROM tracks WHERE active = true ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing tracks: {}", e)))?;

        Ok(tracks)
    }

    pub async fn find_all(&self) -> Result<Vec<Track>, AppError> {
        let tracks =
            sqlx::query_as::<_, Track>("SELECT * FROM tracks ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error listing tracks: {}", e)))?;

        Ok(tracks)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Track>, AppError> {
        let track = sqlx::query_as::<_, Track>("SELECT * FROM tracks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding track: {}", e)))?;

        Ok(track)
    }

    pub async fn update(
        &self,
        id: Uuid,
        title: Option<String>,
        artist: Option<String>,
        file_url: Option<String>,
        active: Option<bool>,
    ) -> Result<Track, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Pista no encontrada".to_string()))?;

        let track = sqlx::query_as::<_, Track>(
            r#"
            UPDATE tracks
            SET title = $2, artist = $3, file_url = $4, active = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title.unwrap_or(current.title))
        .bind(artist.or(current.artist))
        .bind(file_url.unwrap_or(current.file_url))
        .bind(active.unwrap_or(current.active))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating track: {}", e)))?;

        Ok(track)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tracks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting track: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Pista no encontrada".to_string()));
        }

        Ok(())
    }
}
