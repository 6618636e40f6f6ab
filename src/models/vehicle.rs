//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y los enums que mapean
//! exactamente al schema PostgreSQL del catálogo de alquiler.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado de disponibilidad - mapea al ENUM vehicle_status
///
/// Flag grueso de dos estados, independiente de la lista fina de
/// reservas (ver services::availability para la relación entre ambos).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vehicle_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Reserved,
}

/// Carrocería - mapea al ENUM body_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "body_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Suv,
    Sedan,
    Hatchback,
    Pickup,
    Sports,
}

/// Transmisión - mapea al ENUM transmission_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "transmission_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Manual,
    Automatic,
}

/// Combustible - mapea al ENUM fuel_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "fuel_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
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
    /// Solo tiene significado cuando status = Reserved. Su ausencia en ese
    /// estado se interpreta como "no disponible indefinidamente".
    pub next_available_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}
