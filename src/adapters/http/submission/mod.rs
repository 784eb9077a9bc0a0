//! HTTP adapter for submission endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CheckSubmissionResponse, SubmitRestaurantRequest, SubmitRestaurantResponse};
pub use handlers::SubmissionHandlers;
pub use routes::submission_routes;
