//! DTOs de solicitudes de reserva y de reservas registradas

use chrono::{DateTime, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Reservation;
use crate::services::notifier::SubmissionReceipt;

lazy_static! {
    /// Formato internacional laxo: prefijo + opcional, dígitos,
    /// espacios y guiones
    pub static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9][0-9 \-]{6,19}$").unwrap();
}

/// Request público de solicitud de reserva
#[derive(Debug, Deserialize, Validate)]
pub struct BookingRequest {
    pub vehicle_id: Uuid,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(length(min = 2, max = 100))]
    pub customer_name: String,

    #[validate(regex = "PHONE_RE")]
    pub customer_phone: String,
}

/// Response de la solicitud de reserva
///
/// El envío es una notificación, no un commit: la reserva queda
/// registrada cuando un administrador la confirma.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub vehicle_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: i64,
    pub total_price: Decimal,
    pub receipt: SubmissionReceipt,
}

/// Request administrativo para registrar una reserva confirmada
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservationRequest {
    pub vehicle_id: Uuid,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(length(min = 2, max = 100))]
    pub customer_name: String,

    #[validate(regex = "PHONE_RE")]
    pub customer_phone: String,
}

/// Response de reserva registrada
#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub customer_name: String,
    pub customer_phone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            vehicle_id: r.vehicle_id,
            customer_name: r.customer_name,
            customer_phone: r.customer_phone,
            start_date: r.start_date,
            end_date: r.end_date,
            created_at: r.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_regex_accepts_international_formats() {
        assert!(PHONE_RE.is_match("+34600111222"));
        assert!(PHONE_RE.is_match("600 111 222"));
        assert!(PHONE_RE.is_match("55-0199-8877"));
    }

    #[test]
    fn phone_regex_rejects_garbage() {
        assert!(!PHONE_RE.is_match(""));
        assert!(!PHONE_RE.is_match("abc"));
        assert!(!PHONE_RE.is_match("+"));
        assert!(!PHONE_RE.is_match("12345"));
    }

    #[test]
    fn booking_request_validation() {
        let req = BookingRequest {
            vehicle_id: Uuid::new_v4(),
            start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 4, 5).unwrap(),
            customer_name: "Ana".to_string(),
            customer_phone: "+34600111222".to_string(),
        };
        assert!(req.validate().is_ok());

        let bad_phone = BookingRequest {
            customer_phone: "nope".to_string(),
            ..req
        };
        assert!(bad_phone.validate().is_err());
    }
}
