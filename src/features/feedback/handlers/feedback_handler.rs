use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::feedback::dtos::{FeedbackDto, FeedbackStatsDto};
use crate::features::feedback::filter::FeedbackFilter;
use crate::features::feedback::services::FeedbackService;
use crate::shared::types::{ApiResponse, Meta};

/// List citizen feedback
#[utoipa::path(
    get,
    path = "/api/feedback",
    params(FeedbackFilter),
    responses(
        (status = 200, description = "Feedback matching the filter", body = ApiResponse<Vec<FeedbackDto>>)
    ),
    tag = "feedback"
)]
pub async fn list_feedback(
    State(service): State<Arc<FeedbackService>>,
    AppQuery(filter): AppQuery<FeedbackFilter>,
) -> Result<Json<ApiResponse<Vec<FeedbackDto>>>> {
    let (entries, total) = service.list(&filter);
    Ok(Json(ApiResponse::success(
        Some(entries),
        None,
        Some(Meta::total(total)),
    )))
}

/// Feedback summary and technician filter options
#[utoipa::path(
    get,
    path = "/api/feedback/stats",
    responses(
        (status = 200, description = "Feedback statistics", body = ApiResponse<FeedbackStatsDto>)
    ),
    tag = "feedback"
)]
pub async fn get_feedback_stats(
    State(service): State<Arc<FeedbackService>>,
) -> Result<Json<ApiResponse<FeedbackStatsDto>>> {
    Ok(Json(ApiResponse::success(Some(service.stats()), None, None)))
}
