//! Modelo de Reservation
//!
//! Una reserva cubre un rango de fechas de calendario con extremos
//! inclusivos. Muchas reservas pueden apuntar al mismo vehículo.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Reservation - mapea exactamente a la tabla reservations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub customer_name: String,
    pub customer_phone: String,
    /// Invariante: start_date <= end_date, garantizado en el borde de
    /// validación antes de insertar.
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
