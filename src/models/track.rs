//! Modelo de Track
//!
//! Pistas de música de fondo del sitio. El frontend reproduce las
//! pistas activas; el archivo vive en el object store y aquí solo
//! se guarda la referencia.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Track - mapea exactamente a la tabla tracks
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Track {
    pub id: Uuid,
    pub title: String,
    pub artist: Option<String>,
    pub file_url: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
