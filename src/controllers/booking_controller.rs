//! Controller de reservas
//!
//! Orquesta el check de disponibilidad, la solicitud pública de
//! reserva (notificación por el canal externo, sin persistencia) y el
//! registro administrativo de reservas confirmadas.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::booking_dto::{
    BookingRequest, BookingResponse, CreateReservationRequest, ReservationResponse,
};
use crate::dto::vehicle_dto::AvailabilityResponse;
use crate::repositories::reservation_repository::ReservationRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::availability::{is_available, ranges_overlap};
use crate::services::notifier::{BookingNotifier, BookingSummary};
use crate::utils::errors::AppError;
use crate::utils::validation::validate_date_range;

pub struct BookingController {
    vehicles: VehicleRepository,
    reservations: ReservationRepository,
}

/// Días facturados (extremos inclusivos) y precio total de la estancia
pub fn price_for_stay(daily_price: Decimal, start: NaiveDate, end: NaiveDate) -> (i64, Decimal) {
    let days = (end - start).num_days() + 1;
    (days, daily_price * Decimal::from(days))
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            reservations: ReservationRepository::new(pool),
        }
    }

    /// Snapshot consistente (vehículo + sus reservas en secuencia sobre
    /// el mismo pool) y decisión pura del resolutor.
    pub async fn check_availability(
        &self,
        vehicle_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AvailabilityResponse, AppError> {
        validate_date_range(start, end)?;

        let vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let reservations = self.reservations.find_by_vehicle(vehicle_id).await?;

        Ok(AvailabilityResponse {
            vehicle_id,
            start,
            end,
            available: is_available(&vehicle, &reservations, start, end),
        })
    }

    /// Solicitud pública de reserva: si el vehículo está disponible, el
    /// resumen sale por el canal de notificación y el visitante recibe
    /// el enlace de chat. Aquí no se escribe ninguna reserva.
    pub async fn request_booking(
        &self,
        request: BookingRequest,
        notifier: &dyn BookingNotifier,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validate_date_range(request.start_date, request.end_date)?;

        let vehicle = self
            .vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let reservations = self.reservations.find_by_vehicle(request.vehicle_id).await?;

        if !is_available(&vehicle, &reservations, request.start_date, request.end_date) {
            return Err(AppError::Conflict(
                "El vehículo no está disponible en esas fechas".to_string(),
            ));
        }

        let (total_days, total_price) =
            price_for_stay(vehicle.daily_price, request.start_date, request.end_date);

        let summary = BookingSummary {
            vehicle_brand: vehicle.brand,
            vehicle_model: vehicle.model,
            vehicle_year: vehicle.year,
            start_date: request.start_date,
            end_date: request.end_date,
            total_days,
            total_price,
            customer_name: request.customer_name,
            customer_phone: request.customer_phone,
        };

        let receipt = notifier.submit(&summary).await?;

        Ok(ApiResponse::success_with_message(
            BookingResponse {
                vehicle_id: request.vehicle_id,
                start_date: request.start_date,
                end_date: request.end_date,
                total_days,
                total_price,
                receipt,
            },
            "Solicitud enviada. La reserva se confirma por el canal de contacto".to_string(),
        ))
    }

    /// Registro administrativo de una reserva ya confirmada por el
    /// agente. Solo se rechazan rangos malformados o solapados con
    /// reservas existentes; el flag grueso no se consulta aquí.
    pub async fn record_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<ApiResponse<ReservationResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validate_date_range(request.start_date, request.end_date)?;

        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let existing = self.reservations.find_by_vehicle(request.vehicle_id).await?;
        let overlaps = existing.iter().any(|r| {
            ranges_overlap(request.start_date, request.end_date, r.start_date, r.end_date)
        });
        if overlaps {
            return Err(AppError::Conflict(
                "Ya existe una reserva solapada para ese vehículo".to_string(),
            ));
        }

        let reservation = self
            .reservations
            .create(
                request.vehicle_id,
                request.customer_name,
                request.customer_phone,
                request.start_date,
                request.end_date,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            reservation.into(),
            "Reserva registrada exitosamente".to_string(),
        ))
    }

    pub async fn list_for_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<ReservationResponse>, AppError> {
        let reservations = self.reservations.find_by_vehicle(vehicle_id).await?;
        Ok(reservations.into_iter().map(Into::into).collect())
    }

    pub async fn delete_reservation(&self, id: Uuid) -> Result<(), AppError> {
        self.reservations.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn price_counts_both_endpoints() {
        let (days, total) = price_for_stay(Decimal::new(6500, 2), date("2024-04-01"), date("2024-04-15"));
        assert_eq!(days, 15);
        assert_eq!(total, Decimal::new(97500, 2));
    }

    #[test]
    fn single_day_stay_charges_one_day() {
        let (days, total) = price_for_stay(Decimal::new(4000, 2), date("2024-04-01"), date("2024-04-01"));
        assert_eq!(days, 1);
        assert_eq!(total, Decimal::new(4000, 2));
    }
}
