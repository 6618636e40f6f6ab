use sqlx::PgPool;

use crate::models::AdminUser;
use crate::utils::errors::AppError;

pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, AppError> {
        let admin = sqlx::query_as::<_, AdminUser>("SELECT * FROM admin_users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding admin user: {}", e)))?;

        Ok(admin)
    }
}
