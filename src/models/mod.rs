//! Modelos de datos
//!
//! Structs que mapean a las tablas PostgreSQL del sistema.

pub mod admin;
pub mod reservation;
pub mod review;
pub mod track;
pub mod vehicle;

pub use admin::AdminUser;
pub use reservation::Reservation;
pub use review::Review;
pub use track::Track;
pub use vehicle::{BodyType, FuelType, Transmission, Vehicle, VehicleStatus};
