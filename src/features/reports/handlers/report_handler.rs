use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::actions::models::ActionReceipt;
use crate::features::actions::ActionService;
use crate::features::reports::dtos::{
    AssignTechnicianDto, ReportDetailDto, ReportListItemDto, ReportStatsDto,
    UpdateReportStatusDto,
};
use crate::features::reports::filter::ReportFilter;
use crate::features::reports::services::ReportService;
use crate::shared::types::{ApiResponse, Meta};

/// State for report handlers
#[derive(Clone)]
pub struct ReportState {
    pub report_service: Arc<ReportService>,
    pub action_service: Arc<ActionService>,
}

/// List department reports
#[utoipa::path(
    get,
    path = "/api/reports",
    params(ReportFilter),
    responses(
        (status = 200, description = "Reports matching the filter, in submission order", body = ApiResponse<Vec<ReportListItemDto>>)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(state): State<ReportState>,
    AppQuery(filter): AppQuery<ReportFilter>,
) -> Result<Json<ApiResponse<Vec<ReportListItemDto>>>> {
    let (reports, total) = state.report_service.list(&filter);
    Ok(Json(ApiResponse::success(
        Some(reports),
        None,
        Some(Meta::total(total)),
    )))
}

/// Report counts by status and priority
#[utoipa::path(
    get,
    path = "/api/reports/stats",
    responses(
        (status = 200, description = "Report statistics", body = ApiResponse<ReportStatsDto>)
    ),
    tag = "reports"
)]
pub async fn get_report_stats(
    State(state): State<ReportState>,
) -> Result<Json<ApiResponse<ReportStatsDto>>> {
    let stats = state.report_service.stats();
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

/// Get report detail
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = String, Path, description = "Report ID, e.g. RPT-001")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportDetailDto>),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(state): State<ReportState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<ApiResponse<ReportDetailDto>>> {
    let report = state.report_service.get(&id)?;
    Ok(Json(ApiResponse::success(Some(report), None, None)))
}

/// Request a technician assignment
#[utoipa::path(
    post,
    path = "/api/reports/{id}/assignment",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    request_body = AssignTechnicianDto,
    responses(
        (status = 202, description = "Assignment request accepted", body = ApiResponse<ActionReceipt>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Report or technician not found"),
        (status = 409, description = "Technician cannot take this report")
    ),
    tag = "reports"
)]
pub async fn assign_technician(
    State(state): State<ReportState>,
    AppPath(id): AppPath<String>,
    AppJson(dto): AppJson<AssignTechnicianDto>,
) -> Result<(StatusCode, Json<ApiResponse<ActionReceipt>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let receipt = state.action_service.request_assignment(&id, &dto).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(ApiResponse::success(
            Some(receipt),
            Some("Assignment request recorded".to_string()),
            None,
        )),
    ))
}

/// Request a status change
#[utoipa::path(
    patch,
    path = "/api/reports/{id}/status",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 202, description = "Status update request accepted", body = ApiResponse<ActionReceipt>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn update_report_status(
    State(state): State<ReportState>,
    AppPath(id): AppPath<String>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<(StatusCode, Json<ApiResponse<ActionReceipt>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let receipt = state.action_service.request_status_update(&id, &dto).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(ApiResponse::success(
            Some(receipt),
            Some("Status update request recorded".to_string()),
            None,
        )),
    ))
}
