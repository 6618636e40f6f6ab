//! Repositorios de acceso a datos
//!
//! Un struct por tabla, SQL directo con sqlx sobre el pool compartido.

pub mod admin_repository;
pub mod reservation_repository;
pub mod review_repository;
pub mod track_repository;
pub mod vehicle_repository;
