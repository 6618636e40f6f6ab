use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Review;
use crate::utils::errors::AppError;

pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Las opiniones entran sin aprobar; un administrador las modera
    pub async fn create(
        &self,
        author_name: String,
        rating: i32,
        comment: String,
    ) -> Result<Review, AppError> {
        let id = Uuid::new_v4();

        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (id, author_name, rating, comment, approved, created_at)
            VALUES ($1, $2, $3, $4, false, $5)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(author_name)
        .bind(rating)
        .bind(comment)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating review: {}", e)))?;

        Ok(review)
    }

    pub async fn find_approved(&self) -> Result<Vec<Review>, AppError> {
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE approved = true ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing reviews: {}", e)))?;

        Ok(reviews)
    }

    pub async fn find_pending(&self) -> Result<Vec<Review>, AppError> {
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE approved = false ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing pending reviews: {}", e)))?;

        Ok(reviews)
    }

    pub async fn approve(&self, id: Uuid) -> Result<Review, AppError> {
        let review = sqlx::query_as::<_, Review>(
            "UPDATE reviews SET approved = true WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error approving review: {}", e)))?
        .ok_or_else(|| AppError::NotFound("Opinión no encontrada".to_string()))?;

        Ok(review)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting review: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Opinión no encontrada".to_string()));
        }

        Ok(())
    }
}
