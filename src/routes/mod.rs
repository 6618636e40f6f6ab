//! Routers de la API

pub mod auth_routes;
pub mod booking_routes;
pub mod review_routes;
pub mod track_routes;
pub mod vehicle_routes;
