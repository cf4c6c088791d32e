use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::core::extractor::AppQuery;
use crate::features::dashboard::dtos::*;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Get dashboard overview
#[utoipa::path(
    get,
    path = "/api/dashboard/overview",
    tag = "dashboard",
    params(OverviewParams),
    responses(
        (status = 200, description = "Report counts, completion rate and recent reports", body = ApiResponse<DashboardOverviewDto>)
    )
)]
pub async fn get_overview(
    State(service): State<Arc<DashboardService>>,
    AppQuery(params): AppQuery<OverviewParams>,
) -> Result<Json<ApiResponse<DashboardOverviewDto>>, AppError> {
    let overview = service.get_overview(params.limit);
    Ok(Json(ApiResponse::success(Some(overview), None, None)))
}
