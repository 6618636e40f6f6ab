use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Reservation;
use crate::utils::errors::AppError;

pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        customer_name: String,
        customer_phone: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Reservation, AppError> {
        let id = Uuid::new_v4();

        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (id, vehicle_id, customer_name, customer_phone, start_date, end_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#
        )
        .bind(id)
        .bind(vehicle_id)
        .bind(customer_name)
        .bind(customer_phone)
        .bind(start_date)
        .bind(end_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating reservation: {}", e)))?;

        Ok(reservation)
    }

    /// Todas las reservas de un vehículo. Es el pre-filtrado por id que
    /// el resolutor de disponibilidad asume hecho.
    pub async fn find_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<Reservation>, AppError> {
        let reservations = sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE vehicle_id = $1 ORDER BY start_date ASC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing reservations: {}", e)))?;

        Ok(reservations)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, AppError> {
        let reservation =
            sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error finding reservation: {}", e)))?;

        Ok(reservation)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting reservation: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Reserva no encontrada".to_string()));
        }

        Ok(())
    }
}
