//! DTOs de Review

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Review;

/// Request público para dejar una opinión (entra sin aprobar)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(length(min = 2, max = 100))]
    pub author_name: String,

    #[validate(range(min = 1, max = 5))]
    pub rating: i32,

    #[validate(length(min = 1, max = 2000))]
    pub comment: String,
}

/// Response de opinión
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub author_name: String,
    pub rating: i32,
    pub comment: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            author_name: review.author_name,
            rating: review.rating,
            comment: review.comment,
            approved: review.approved,
            created_at: review.created_at,
        }
    }
}
