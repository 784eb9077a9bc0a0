//! Submission command and query handlers.

mod check_submission;
mod list_submissions;
mod submit_restaurant;

pub use check_submission::{CheckSubmissionHandler, CheckSubmissionQuery, SubmissionStatus};
pub use list_submissions::{ListSubmissionsHandler, ListSubmissionsQuery};
pub use submit_restaurant::{
    SubmitRestaurantCommand, SubmitRestaurantHandler, SubmitRestaurantResult,
};
