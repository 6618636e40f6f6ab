use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vehicle_dto::VehicleFilters;
use crate::models::{BodyType, FuelType, Transmission, Vehicle, VehicleStatus};
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        brand: String,
        model: String,
        year: i32,
        body_type: BodyType,
        transmission: Transmission,
        seats: i32,
        fuel_type: FuelType,
        daily_price: Decimal,
        image_url: Option<String>,
    ) -> Result<Vehicle, AppError> {
        let id = Uuid::new_v4();

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, brand, model, year, body_type, transmission, seats, fuel_type, daily_price, image_url, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'available', $11)
            RETURNING *
            "#
        )
        .bind(id)
        .bind(brand)
        .bind(model)
        .bind(year)
        .bind(body_type)
        .bind(transmission)
        .bind(seats)
        .bind(fuel_type)
        .bind(daily_price)
        .bind(image_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding vehicle: {}", e)))?;

        Ok(vehicle)
    }

    /// Listado filtrado del catálogo. Los filtros ausentes se neutralizan
    /// con el patrón `($n IS NULL OR columna = $n)`.
    pub async fn find_filtered(&self, filters: &VehicleFilters) -> Result<Vec<Vehicle>, AppError> {
        let brand_pattern = filters.brand.as_ref().map(|b| format!("%{}%", b));

        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE ($1::body_type IS NULL OR body_type = $1)
              AND ($2::transmission_type IS NULL OR transmission = $2)
              AND ($3::fuel_type IS NULL OR fuel_type = $3)
              AND ($4::int IS NULL OR seats = $4)
              AND ($5::text IS NULL OR brand ILIKE $5)
              AND ($6::numeric IS NULL OR daily_price >= $6)
              AND ($7::numeric IS NULL OR daily_price <= $7)
            ORDER BY created_at DESC
            LIMIT $8 OFFSET $9
            "#,
        )
        .bind(filters.body_type)
        .bind(filters.transmission)
        .bind(filters.fuel_type)
        .bind(filters.seats)
        .bind(brand_pattern)
        .bind(filters.price_min)
        .bind(filters.price_max)
        .bind(filters.limit.unwrap_or(50).clamp(1, 200))
        .bind(filters.offset.unwrap_or(0).max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing vehicles: {}", e)))?;

        Ok(vehicles)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        brand: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        body_type: Option<BodyType>,
        transmission: Option<Transmission>,
        seats: Option<i32>,
        fuel_type: Option<FuelType>,
        daily_price: Option<Decimal>,
        image_url: Option<String>,
    ) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET brand = $2, model = $3, year = $4, body_type = $5, transmission = $6,
                seats = $7, fuel_type = $8, daily_price = $9, image_url = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(brand.unwrap_or(current.brand))
        .bind(model.unwrap_or(current.model))
        .bind(year.unwrap_or(current.year))
        .bind(body_type.unwrap_or(current.body_type))
        .bind(transmission.unwrap_or(current.transmission))
        .bind(seats.unwrap_or(current.seats))
        .bind(fuel_type.unwrap_or(current.fuel_type))
        .bind(daily_price.unwrap_or(current.daily_price))
        .bind(image_url.or(current.image_url))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    /// Transición administrativa del flag grueso Available <-> Reserved
    pub async fn update_status(
        &self,
        id: Uuid,
        status: VehicleStatus,
        next_available_date: Option<NaiveDate>,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET status = $2, next_available_date = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(next_available_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating vehicle status: {}", e)))?
        .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting vehicle: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }
}
