//! Resolutor de disponibilidad
//!
//! Decide si un vehículo puede reservarse para un rango de fechas
//! solicitado. Es una función pura: no toca la base de datos ni muta
//! nada; el caller le entrega un snapshot consistente del vehículo y
//! de sus reservas (leídas en la misma secuencia sobre el pool).
//!
//! NOTA: existen dos fuentes de verdad sobre disponibilidad — el flag
//! grueso `status`/`next_available_date` del vehículo y la lista fina
//! de reservas. La rama Reserved consulta SOLO el flag e ignora la
//! lista, comportamiento heredado que se conserva deliberadamente por
//! compatibilidad (documentado en DESIGN.md). Los administradores son
//! quienes transicionan el flag; esta función nunca escribe.

use chrono::NaiveDate;

use crate::models::{Reservation, Vehicle, VehicleStatus};

/// Determina si `vehicle` puede reservarse en `[candidate_start, candidate_end]`.
///
/// `reservations` debe venir pre-filtrada por vehículo; aquí no se
/// compara `vehicle_id`. Contrato del caller: `candidate_start <=
/// candidate_end` y cada reserva con `start_date <= end_date` (se
/// validan en el borde HTTP antes de llegar aquí).
pub fn is_available(
    vehicle: &Vehicle,
    reservations: &[Reservation],
    candidate_start: NaiveDate,
    candidate_end: NaiveDate,
) -> bool {
    match vehicle.status {
        VehicleStatus::Reserved => match vehicle.next_available_date {
            // Sin fecha de reapertura: no disponible, default conservador
            None => false,
            Some(next_available) => candidate_start >= next_available,
        },
        VehicleStatus::Available => !reservations
            .iter()
            .any(|r| ranges_overlap(candidate_start, candidate_end, r.start_date, r.end_date)),
    }
}

/// Test de solapamiento de intervalos cerrados.
///
/// `[a, b]` y `[c, d]` se solapan sii `a <= d && c <= b`. Los extremos
/// son inclusivos: un candidato que termina exactamente donde empieza
/// una reserva existente cuenta como solapado.
pub fn ranges_overlap(a: NaiveDate, b: NaiveDate, c: NaiveDate, d: NaiveDate) -> bool {
    a <= d && c <= b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BodyType, FuelType, Transmission};
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn vehicle(status: VehicleStatus, next_available_date: Option<NaiveDate>) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2022,
            body_type: BodyType::Sedan,
            transmission: Transmission::Automatic,
            seats: 5,
            fuel_type: FuelType::Hybrid,
            daily_price: Decimal::new(4500, 2),
            image_url: None,
            status,
            next_available_date,
            created_at: Utc::now(),
        }
    }

    fn reservation(vehicle_id: Uuid, start: &str, end: &str) -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            vehicle_id,
            customer_name: "Cliente de prueba".to_string(),
            customer_phone: "+34600000000".to_string(),
            start_date: date(start),
            end_date: date(end),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn available_without_reservations_always_bookable() {
        let v = vehicle(VehicleStatus::Available, None);
        assert!(is_available(&v, &[], date("2024-01-01"), date("2024-01-01")));
        assert!(is_available(&v, &[], date("2024-06-10"), date("2030-12-31")));
    }

    #[test]
    fn candidate_inside_existing_reservation_rejected() {
        let v = vehicle(VehicleStatus::Available, None);
        let rs = vec![reservation(v.id, "2024-04-01", "2024-04-15")];
        assert!(!is_available(&v, &rs, date("2024-04-05"), date("2024-04-10")));
    }

    #[test]
    fn candidate_strictly_before_or_after_accepted() {
        let v = vehicle(VehicleStatus::Available, None);
        let rs = vec![reservation(v.id, "2024-04-01", "2024-04-15")];
        assert!(is_available(&v, &rs, date("2024-03-01"), date("2024-03-31")));
        assert!(is_available(&v, &rs, date("2024-04-16"), date("2024-04-20")));
    }

    #[test]
    fn boundary_touch_counts_as_overlap() {
        let v = vehicle(VehicleStatus::Available, None);
        let rs = vec![reservation(v.id, "2024-04-01", "2024-04-15")];
        // candidato termina justo donde empieza la reserva
        assert!(!is_available(&v, &rs, date("2024-03-20"), date("2024-04-01")));
        // candidato empieza justo donde termina la reserva
        assert!(!is_available(&v, &rs, date("2024-04-15"), date("2024-04-16")));
    }

    #[test]
    fn any_overlap_among_several_reservations_rejects() {
        let v = vehicle(VehicleStatus::Available, None);
        let rs = vec![
            reservation(v.id, "2024-01-10", "2024-01-12"),
            reservation(v.id, "2024-02-01", "2024-02-05"),
            reservation(v.id, "2024-03-20", "2024-03-25"),
        ];
        assert!(!is_available(&v, &rs, date("2024-02-05"), date("2024-02-08")));
        assert!(is_available(&v, &rs, date("2024-02-06"), date("2024-03-19")));
    }

    #[test]
    fn reserved_with_next_date_ignores_reservation_list() {
        let next = date("2024-05-01");
        let v = vehicle(VehicleStatus::Reserved, Some(next));
        // reserva solapada presente, pero la rama Reserved no la consulta
        let rs = vec![reservation(v.id, "2024-05-01", "2024-12-31")];
        assert!(is_available(&v, &rs, date("2024-05-01"), date("2024-05-10")));
        assert!(is_available(&v, &rs, date("2024-06-01"), date("2024-06-02")));
        assert!(!is_available(&v, &rs, date("2024-04-30"), date("2024-05-10")));
    }

    #[test]
    fn reserved_without_next_date_never_bookable() {
        let v = vehicle(VehicleStatus::Reserved, None);
        assert!(!is_available(&v, &[], date("2024-01-01"), date("2024-01-02")));
        assert!(!is_available(&v, &[], date("2099-01-01"), date("2099-12-31")));
    }

    #[test]
    fn reference_scenario_april_2024() {
        let v = vehicle(VehicleStatus::Available, None);
        let rs = vec![reservation(v.id, "2024-04-01", "2024-04-15")];
        assert!(is_available(&v, &rs, date("2024-03-01"), date("2024-03-31")));
        assert!(!is_available(&v, &rs, date("2024-04-10"), date("2024-04-20")));
        assert!(is_available(&v, &rs, date("2024-04-16"), date("2024-04-20")));
        assert!(!is_available(&v, &rs, date("2024-04-15"), date("2024-04-16")));
    }

    #[test]
    fn single_day_ranges_overlap_inclusively() {
        assert!(ranges_overlap(
            date("2024-04-01"),
            date("2024-04-01"),
            date("2024-04-01"),
            date("2024-04-01"),
        ));
        assert!(!ranges_overlap(
            date("2024-04-01"),
            date("2024-04-01"),
            date("2024-04-02"),
            date("2024-04-02"),
        ));
    }
}
