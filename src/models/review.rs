//! Modelo de Review
//!
//! Opiniones de clientes. Solo las aprobadas por un administrador
//! se muestran en el sitio público.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Review - mapea exactamente a la tabla reviews
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: Uuid,
    pub author_name: String,
    pub rating: i32,
    pub comment: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}
