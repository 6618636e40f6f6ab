//! DTOs de Vehicle
//!
//! Requests validados y responses de la API para el catálogo.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{BodyType, FuelType, Transmission, Vehicle, VehicleStatus};

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub brand: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1980, max = 2030))]
    pub year: i32,

    pub body_type: BodyType,

    pub transmission: Transmission,

    #[validate(range(min = 2, max = 9))]
    pub seats: i32,

    pub fuel_type: FuelType,

    pub daily_price: Decimal,

    #[validate(url)]
    pub image_url: Option<String>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub brand: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1980, max = 2030))]
    pub year: Option<i32>,

    pub body_type: Option<BodyType>,

    pub transmission: Option<Transmission>,

    #[validate(range(min = 2, max = 9))]
    pub seats: Option<i32>,

    pub fuel_type: Option<FuelType>,

    pub daily_price: Option<Decimal>,

    #[validate(url)]
    pub image_url: Option<String>,
}

/// Request para cambiar el flag grueso de disponibilidad
///
/// Es la acción administrativa que efectúa la transición
/// Available <-> Reserved; el resolutor nunca la ejecuta.
#[derive(Debug, Deserialize)]
pub struct UpdateVehicleStatusRequest {
    pub status: VehicleStatus,
    pub next_available_date: Option<NaiveDate>,
}

/// Filtros para búsqueda de vehículos
#[derive(Debug, Deserialize)]
pub struct VehicleFilters {
    pub body_type: Option<BodyType>,
    pub transmission: Option<Transmission>,
    pub fuel_type: Option<FuelType>,
    pub seats: Option<i32>,
    pub brand: Option<String>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query string del check de disponibilidad
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Response del check de disponibilidad
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub vehicle_id: Uuid,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub available: bool,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub body_type: BodyType,
    pub transmission: Transmission,
    pub seats: i32,
    pub fuel_type: FuelType,
    pub daily_price: Decimal,
    pub image_url: Option<String>,
    pub status: VehicleStatus,
    pub next_available_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            body_type: vehicle.body_type,
            transmission: vehicle.transmission,
            seats: vehicle.seats,
            fuel_type: vehicle.fuel_type,
            daily_price: vehicle.daily_price,
            image_url: vehicle.image_url,
            status: vehicle.status,
            next_available_date: vehicle.next_available_date,
            created_at: vehicle.created_at,
        }
    }
}
