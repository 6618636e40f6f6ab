//! Servicios de dominio
//!
//! Lógica que no pertenece a ningún controller concreto: el resolutor
//! de disponibilidad (puro) y el canal de notificación de reservas.

pub mod availability;
pub mod notifier;
