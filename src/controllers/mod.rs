//! Controllers (reglas de negocio)

pub mod auth_controller;
pub mod booking_controller;
pub mod review_controller;
pub mod track_controller;
pub mod vehicle_controller;
