//! DTOs de Track (música de fondo)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Track;

/// Request para subir una pista (el archivo ya vive en el object store)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTrackRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 200))]
    pub artist: Option<String>,

    #[validate(url)]
    pub file_url: String,

    pub active: Option<bool>,
}

/// Request para actualizar una pista
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTrackRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub artist: Option<String>,

    #[validate(url)]
    pub file_url: Option<String>,

    pub active: Option<bool>,
}

/// Response de pista
#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub id: Uuid,
    pub title: String,
    pub artist: Option<String>,
    pub file_url: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Track> for TrackResponse {
    fn from(track: Track) -> Self {
        Self {
            id: track.id,
            title: track.title,
            artist: track.artist,
            file_url: track.file_url,
            active: track.active,
            created_at: track.created_at,
        }
    }
}
