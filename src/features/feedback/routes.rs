use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::feedback::handlers;
use crate::features::feedback::services::FeedbackService;

pub fn routes(feedback_service: Arc<FeedbackService>) -> Router {
    Router::new()
        .route("/api/feedback", get(handlers::list_feedback))
        .route("/api/feedback/stats", get(handlers::get_feedback_stats))
        .with_state(feedback_service)
}
