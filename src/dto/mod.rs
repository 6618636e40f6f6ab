//! DTOs de la API
//!
//! Requests con validación y responses serializables.

pub mod auth_dto;
pub mod booking_dto;
pub mod review_dto;
pub mod track_dto;
pub mod vehicle_dto;
