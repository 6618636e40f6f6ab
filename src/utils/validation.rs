//! Utilidades de validación
//!
//! Funciones helper para validación de datos y conversión de tipos
//! en el borde HTTP.

use chrono::NaiveDate;

use crate::utils::errors::AppError;

/// Validar un rango de fechas inclusivo antes de tocar el resolutor
///
/// El resolutor asume `start <= end`; un rango invertido es una
/// violación de contrato del caller y se rechaza aquí con 400.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if start > end {
        return Err(AppError::Validation(format!(
            "Rango de fechas inválido: {} > {}",
            start, end
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn date_range_accepts_ordered_and_single_day() {
        assert!(validate_date_range(date("2024-04-01"), date("2024-04-15")).is_ok());
        assert!(validate_date_range(date("2024-04-01"), date("2024-04-01")).is_ok());
    }

    #[test]
    fn date_range_rejects_inverted() {
        let err = validate_date_range(date("2024-04-15"), date("2024-04-01"));
        assert!(matches!(err, Err(AppError::Validation(_))));
    }

}
