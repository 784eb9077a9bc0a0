//! Request and response DTOs for submission endpoints.

use serde::{Deserialize, Serialize};

use crate::application::SubmissionStatus;

/// Body of `POST /submit-restaurant/`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRestaurantRequest {
    pub session_id: i64,
    pub restaurant_name: String,
    pub user_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRestaurantResponse {
    pub message: String,
    pub progress: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSubmissionResponse {
    pub submitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
}

impl From<SubmissionStatus> for CheckSubmissionResponse {
    fn from(status: SubmissionStatus) -> Self {
        Self {
            submitted: status.submitted,
            restaurant_name: status.restaurant_name,
        }
    }
}
